use crate::models::BookingRequest;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub phone: String,
    pub service: String,
    pub datetime: String,
    pub comment: String,
}

impl BookingForm {
    pub fn collect(&self) -> BookingRequest {
        BookingRequest {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            service: self.service.clone(),
            datetime: self.datetime.clone(),
            comment: self.comment.trim().to_string(),
            ..BookingRequest::default()
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_trims_selected_fields() {
        let form = BookingForm {
            name: "  Ion ".to_string(),
            phone: " 06911111".to_string(),
            service: " oil".to_string(),
            datetime: "2025-01-01T10:00 ".to_string(),
            comment: " brakes squeak \n".to_string(),
        };
        let request = form.collect();
        assert_eq!(request.name, "Ion");
        assert_eq!(request.phone, "06911111");
        assert_eq!(request.service, " oil");
        assert_eq!(request.datetime, "2025-01-01T10:00 ");
        assert_eq!(request.comment, "brakes squeak");
    }

    #[test]
    fn test_reset() {
        let mut form = BookingForm {
            name: "Ion".to_string(),
            ..BookingForm::default()
        };
        assert!(!form.is_empty());
        form.reset();
        assert!(form.is_empty());
    }
}
