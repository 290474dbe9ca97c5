use crate::api::{ApiClient, ApiError, UserResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct UserRepository {
    client: Rc<ApiClient>,
}

impl UserRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_current_user(&self) -> Result<UserResponse, ApiError> {
        self.client.get_current_user().await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn fetch_current_user_delegates_to_client() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/users/1");
            then.status(200).json_body(json!({ "name": "John" }));
        });

        let repo =
            UserRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(server.base_url())));
        let user = repo.fetch_current_user().await.unwrap();
        assert_eq!(user.name, "John");
    }
}
