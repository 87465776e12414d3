//! Data access and presentation kept in separate units.
//!
//! `DataService` only talks to the transport. `DataListComponent` only holds
//! presentation state and reaches the transport through the service.

use crate::core::injector::Injector;
use crate::domain::model::Payload;
use crate::domain::ports::HttpTransport;
use crate::utils::error::Result;
use std::sync::Arc;

pub const DEFAULT_API_URL: &str = "https://api.example.com/data";

pub struct DataService {
    transport: Arc<dyn HttpTransport>,
    api_url: String,
}

impl DataService {
    pub fn new(transport: Arc<dyn HttpTransport>, api_url: impl Into<String>) -> Self {
        Self {
            transport,
            api_url: api_url.into(),
        }
    }

    /// 取得資料集合，原樣回傳 transport 的結果
    pub async fn get_data(&self) -> Result<Payload> {
        self.transport.get(&self.api_url).await
    }

    /// 送出一筆新資料，原樣回傳 transport 的結果
    pub async fn post_data(&self, body: &Payload) -> Result<Payload> {
        self.transport.post(&self.api_url, body).await
    }
}

pub struct DataListComponent {
    service: Arc<DataService>,
    data: Option<Payload>,
    initialized: bool,
}

impl DataListComponent {
    pub fn new(service: Arc<DataService>) -> Self {
        Self {
            service,
            data: None,
            initialized: false,
        }
    }

    pub fn from_injector(injector: &Injector) -> Result<Self> {
        Ok(Self::new(injector.get::<DataService>()?))
    }

    /// Lifecycle hook. Loads the collection on first activation only; a failed
    /// load leaves the component unactivated so it can be retried.
    pub async fn on_init(&mut self) -> Result<()> {
        if self.initialized {
            return Ok(());
        }

        let data = self.service.get_data().await?;
        self.data = Some(data);
        self.initialized = true;
        Ok(())
    }

    pub fn data(&self) -> Option<&Payload> {
        self.data.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SolidError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeTransport {
        calls: Mutex<Vec<(String, String, Option<Payload>)>>,
        fail: bool,
    }

    impl FakeTransport {
        fn calls(&self) -> Vec<(String, String, Option<Payload>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpTransport for FakeTransport {
        async fn get(&self, url: &str) -> Result<Payload> {
            self.calls
                .lock()
                .unwrap()
                .push(("GET".to_string(), url.to_string(), None));
            if self.fail {
                return Err(SolidError::Io(std::io::Error::new(
                    std::io::ErrorKind::ConnectionReset,
                    "boom",
                )));
            }
            Ok(json!([{"id": 1}, {"id": 2}]))
        }

        async fn post(&self, url: &str, body: &Payload) -> Result<Payload> {
            self.calls
                .lock()
                .unwrap()
                .push(("POST".to_string(), url.to_string(), Some(body.clone())));
            Ok(json!({"echo": body}))
        }
    }

    #[tokio::test]
    async fn test_get_data_returns_transport_result_unchanged() {
        let transport = Arc::new(FakeTransport::default());
        let service = DataService::new(transport.clone(), DEFAULT_API_URL);

        let data = service.get_data().await.unwrap();

        assert_eq!(data, json!([{"id": 1}, {"id": 2}]));
        assert_eq!(
            transport.calls(),
            vec![("GET".to_string(), DEFAULT_API_URL.to_string(), None)]
        );
    }

    #[tokio::test]
    async fn test_post_data_forwards_body() {
        let transport = Arc::new(FakeTransport::default());
        let service = DataService::new(transport.clone(), DEFAULT_API_URL);
        let body = json!({"name": "new"});

        let response = service.post_data(&body).await.unwrap();

        assert_eq!(response, json!({"echo": {"name": "new"}}));
        assert_eq!(transport.calls()[0].2, Some(body));
    }

    #[tokio::test]
    async fn test_transport_error_propagates_untouched() {
        let transport = Arc::new(FakeTransport {
            fail: true,
            ..Default::default()
        });
        let service = DataService::new(transport, DEFAULT_API_URL);

        let err = service.get_data().await.unwrap_err();
        match err {
            SolidError::Io(e) => {
                assert_eq!(e.kind(), std::io::ErrorKind::ConnectionReset);
                assert_eq!(e.to_string(), "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_on_init_loads_once() {
        let transport = Arc::new(FakeTransport::default());
        let service = Arc::new(DataService::new(transport.clone(), DEFAULT_API_URL));
        let mut component = DataListComponent::new(service);
        assert!(component.data().is_none());

        component.on_init().await.unwrap();
        component.on_init().await.unwrap();

        assert_eq!(component.data(), Some(&json!([{"id": 1}, {"id": 2}])));
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_on_init_failure_leaves_component_retryable() {
        let transport = Arc::new(FakeTransport {
            fail: true,
            ..Default::default()
        });
        let service = Arc::new(DataService::new(transport.clone(), DEFAULT_API_URL));
        let mut component = DataListComponent::new(service);

        assert!(component.on_init().await.is_err());
        assert!(component.on_init().await.is_err());
        assert!(component.data().is_none());
        assert_eq!(transport.calls().len(), 2);
    }
}
