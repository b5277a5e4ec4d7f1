use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;

use crate::models::{Booking, BookingRequest, CreatedResponse};

#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn create(&self, request: &BookingRequest) -> anyhow::Result<Booking>;
    async fn list(&self) -> anyhow::Result<Vec<Booking>>;
}

#[async_trait]
impl<T: BookingApi + ?Sized> BookingApi for Arc<T> {
    async fn create(&self, request: &BookingRequest) -> anyhow::Result<Booking> {
        (**self).create(request).await
    }

    async fn list(&self) -> anyhow::Result<Vec<Booking>> {
        (**self).list().await
    }
}

pub struct HttpBookingApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBookingApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn bookings_url(&self) -> String {
        format!("{}/api/bookings", self.base_url)
    }
}

#[async_trait]
impl BookingApi for HttpBookingApi {
    async fn create(&self, request: &BookingRequest) -> anyhow::Result<Booking> {
        let created: CreatedResponse = self
            .client
            .post(self.bookings_url())
            .json(request)
            .send()
            .await
            .context("failed to reach booking server")?
            .error_for_status()
            .context("booking server returned error")?
            .json()
            .await
            .context("failed to parse booking server response")?;

        anyhow::ensure!(created.ok, "booking server did not acknowledge the booking");
        Ok(created.booking)
    }

    async fn list(&self) -> anyhow::Result<Vec<Booking>> {
        self.client
            .get(self.bookings_url())
            .send()
            .await
            .context("failed to reach booking server")?
            .error_for_status()
            .context("booking server returned error")?
            .json()
            .await
            .context("failed to parse booking list")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_dropped() {
        let api = HttpBookingApi::new("http://localhost:3000/");
        assert_eq!(api.bookings_url(), "http://localhost:3000/api/bookings");
    }
}
