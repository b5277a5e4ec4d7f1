use super::{BookingApi, BookingForm, PendingStore};
use crate::models::{Booking, PendingBooking};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    // `stored_count` is the size of the server's listing afterwards, when it
    // could be fetched.
    Confirmed {
        booking: Booking,
        stored_count: Option<usize>,
    },
    Pending(PendingBooking),
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("failed to save booking locally: {0:#}")]
    LocalWrite(#[source] anyhow::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    FillRequired,
    SentServer,
    SavedLocal,
    Failed,
}

impl Notice {
    pub fn for_result(result: &Result<SubmitOutcome, SubmitError>) -> Self {
        match result {
            Ok(SubmitOutcome::Confirmed { .. }) => Notice::SentServer,
            Ok(SubmitOutcome::Pending(_)) => Notice::SavedLocal,
            Err(SubmitError::MissingFields(_)) => Notice::FillRequired,
            Err(SubmitError::LocalWrite(_)) => Notice::Failed,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Notice::FillRequired => "alerts.fillRequired",
            Notice::SentServer => "alerts.sentServer",
            Notice::SavedLocal => "alerts.savedLocal",
            Notice::Failed => "alerts.failed",
        }
    }

    pub const fn fallback(self) -> &'static str {
        match self {
            Notice::FillRequired => "Please fill in name, phone and date/time.",
            Notice::SentServer => "Заявка отправлена! Мы свяжемся с вами для подтверждения. (Отправлено на сервер)",
            Notice::SavedLocal => "Сервер недоступен — заявка сохранена локально. Мы покажем её в списке при подключении.",
            Notice::Failed => "Could not save the request. Please try again.",
        }
    }
}

pub struct SubmissionController {
    api: Box<dyn BookingApi>,
    pending: PendingStore,
}

impl SubmissionController {
    pub fn new(api: Box<dyn BookingApi>, pending: PendingStore) -> Self {
        Self { api, pending }
    }

    pub fn pending(&self) -> &PendingStore {
        &self.pending
    }

    // Server or local list, never both. The form is only cleared on success.
    pub async fn submit(&self, form: &mut BookingForm) -> Result<SubmitOutcome, SubmitError> {
        let request = form.collect();

        let missing = request.missing_fields();
        if !missing.is_empty() {
            return Err(SubmitError::MissingFields(missing));
        }

        match self.api.create(&request).await {
            Ok(booking) => {
                form.reset();
                tracing::info!(id = booking.id, "booking sent to server");

                let stored_count = match self.api.list().await {
                    Ok(all) => Some(all.len()),
                    Err(e) => {
                        tracing::warn!(error = %format!("{e:#}"), "could not refresh booking count");
                        None
                    }
                };

                Ok(SubmitOutcome::Confirmed {
                    booking,
                    stored_count,
                })
            }
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "booking server unavailable, saving locally");

                let pending = self
                    .pending
                    .append(request)
                    .map_err(SubmitError::LocalWrite)?;
                form.reset();

                Ok(SubmitOutcome::Pending(pending))
            }
        }
    }
}
