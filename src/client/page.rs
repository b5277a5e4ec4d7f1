use super::{BookingForm, Notice, SubmissionController, SubmitOutcome};
use crate::dom::Element;
use crate::i18n::{Locale, Localizer, COUNTER_ID};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub notice: Notice,
    pub message: String,
}

pub struct BookingPage {
    pub document: Element,
    pub form: BookingForm,
    localizer: Localizer,
    controller: SubmissionController,
}

impl BookingPage {
    pub fn new(document: Element, localizer: Localizer, controller: SubmissionController) -> Self {
        Self {
            document,
            form: BookingForm::default(),
            localizer,
            controller,
        }
    }

    pub fn load(&mut self) {
        let pending = self.controller.pending().count();
        self.localizer.apply(&mut self.document, pending);
        self.set_counter(pending);
    }

    pub fn locale(&self) -> Locale {
        self.localizer.locale()
    }

    pub fn switch_language(&mut self, code: &str) -> Locale {
        let pending = self.controller.pending().count();
        self.localizer.switch(code, &mut self.document, pending)
    }

    pub fn press_language_button(&mut self, code: &str) -> Option<Locale> {
        let is_button = |el: &Element| {
            el.attr("data-lang") == Some(code)
                && el
                    .attr("class")
                    .is_some_and(|class| class.split_whitespace().any(|c| c == "lang-btn"))
        };
        self.document.find(&is_button)?;
        Some(self.switch_language(code))
    }

    pub async fn submit(&mut self) -> Alert {
        let result = self.controller.submit(&mut self.form).await;

        match &result {
            Ok(SubmitOutcome::Confirmed {
                stored_count: Some(count),
                ..
            }) => self.set_counter(*count),
            Ok(SubmitOutcome::Pending(_)) => {
                let pending = self.controller.pending().count();
                self.set_counter(pending);
            }
            _ => {}
        }

        let notice = Notice::for_result(&result);
        if let Err(e) = &result {
            tracing::debug!(error = %e, "submission not accepted");
        }

        Alert {
            notice,
            message: self.localizer.tr_or(notice.key(), notice.fallback()).to_string(),
        }
    }

    pub fn counter_text(&self) -> Option<String> {
        self.document.by_id(COUNTER_ID).map(Element::text_content)
    }

    fn set_counter(&mut self, count: usize) {
        if let Some(counter) = self.document.by_id_mut(COUNTER_ID) {
            counter.set_text(&count.to_string());
        }
    }
}
