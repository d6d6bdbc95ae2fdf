// User Repository Client
// Four remote operations against the `users` resource

use crate::config::AppConfig;
use crate::error::{ServiceError, ServiceResult};
use crate::models::{NewUser, User};

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

/// Remote user store.
///
/// Implementations log their own failures and hand them back as values;
/// none of them retry.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch every user
    async fn list(&self) -> ServiceResult<Vec<User>>;

    /// Ask the server to create a user
    async fn create(&self, user: &NewUser) -> ServiceResult<User>;

    /// Replace the identified user
    async fn update(&self, id: u64, user: &User) -> ServiceResult<User>;

    /// Remove the identified user
    async fn delete(&self, id: u64) -> ServiceResult<()>;
}

/// HTTP implementation of [`UserRepository`]
#[derive(Debug, Clone)]
pub struct HttpUserRepository {
    client: Client,
    base_url: String,
}

impl HttpUserRepository {
    pub fn new(config: &AppConfig) -> ServiceResult<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        debug!(base_url = %config.api_url, "Created user repository client");
        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join a resource path onto the base URL
    pub fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(&self, request: RequestBuilder) -> ServiceResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ServiceError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> ServiceResult<T> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn fetch_all(&self) -> ServiceResult<Vec<User>> {
        let response = self.send(self.client.get(self.build_url("users"))).await?;
        let users: Vec<User> = Self::read_json(response).await?;
        debug!(count = users.len(), "Fetched users");
        Ok(users)
    }

    async fn post_new(&self, user: &NewUser) -> ServiceResult<User> {
        let request = self.client.post(self.build_url("users/add")).json(user);
        let response = self.send(request).await?;
        // The created record's shape is not part of the contract
        match Self::read_json::<User>(response).await {
            Ok(created) => Ok(created),
            Err(e) => {
                debug!(error = %e, "Create response was not a user record");
                Ok(user.clone().into_user(0))
            }
        }
    }

    async fn put_existing(&self, id: u64, user: &User) -> ServiceResult<User> {
        let request = self
            .client
            .put(self.build_url(&format!("users/edit/{}", id)))
            .json(user);
        let response = self.send(request).await?;
        match Self::read_json::<User>(response).await {
            Ok(updated) => Ok(updated),
            Err(e) => {
                debug!(error = %e, "Update response was not a user record");
                Ok(user.clone())
            }
        }
    }

    async fn remove(&self, id: u64) -> ServiceResult<()> {
        let request = self
            .client
            .delete(self.build_url(&format!("users/delete/{}", id)));
        self.send(request).await?;
        Ok(())
    }
}

fn logged<T>(operation: &str, result: ServiceResult<T>) -> ServiceResult<T> {
    if let Err(e) = &result {
        warn!(operation, error = %e, "User repository request failed");
    }
    result
}

#[async_trait]
impl UserRepository for HttpUserRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> ServiceResult<Vec<User>> {
        logged("list", self.fetch_all().await)
    }

    #[instrument(skip(self, user), fields(name = %user.name))]
    async fn create(&self, user: &NewUser) -> ServiceResult<User> {
        logged("create", self.post_new(user).await)
    }

    #[instrument(skip(self, user))]
    async fn update(&self, id: u64, user: &User) -> ServiceResult<User> {
        logged("update", self.put_existing(id, user).await)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: u64) -> ServiceResult<()> {
        logged("delete", self.remove(id).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve one canned HTTP response on a loopback port and hand back the
    /// raw request that was received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                request.extend_from_slice(&buf[..n]);
                if n == 0 || request_complete(&request) {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&request).to_string()
        });
        (format!("http://{}", addr), handle)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        raw.len() >= header_end + 4 + content_length
    }

    fn repo_for(url: &str) -> HttpUserRepository {
        let config = AppConfig {
            api_url: url.to_string(),
            ..Default::default()
        };
        HttpUserRepository::new(&config).unwrap()
    }

    #[test]
    fn test_build_url_trims_slashes() {
        let repo = repo_for("http://localhost:3000/");
        assert_eq!(repo.base_url(), "http://localhost:3000");
        assert_eq!(repo.build_url("/users"), "http://localhost:3000/users");
        assert_eq!(
            repo.build_url("users/edit/4"),
            "http://localhost:3000/users/edit/4"
        );
    }

    #[tokio::test]
    async fn test_list_decodes_users() {
        let (url, server) = serve_once(
            "200 OK",
            r#"[{"id":1,"name":"Ann","lastName":"Lee","email":"ann@example.com"},{"id":2,"name":"Bo","email":"bo@example.com","phone":"555"}]"#,
        )
        .await;

        let users = repo_for(&url).list().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].last_name, "Lee");
        assert_eq!(users[1].phone.as_deref(), Some("555"));

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /users HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_create_posts_to_add_path() {
        let (url, server) = serve_once("201 Created", r#"{"id":11,"name":"Bo"}"#).await;
        let payload = User::new(0, "Bo", "Diddley", "bo@example.com").to_new_user();

        let created = repo_for(&url).create(&payload).await.unwrap();
        assert_eq!(created.id, 11);

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /users/add HTTP/1.1"));
        assert!(request.contains(r#""lastName":"Diddley""#));
        assert!(!request.contains(r#""id""#));
    }

    #[tokio::test]
    async fn test_update_tolerates_unexpected_body() {
        let (url, server) = serve_once("200 OK", r#"{"ok":true}"#).await;
        let user = User::new(4, "Ann", "Lee", "ann@example.com");

        let updated = repo_for(&url).update(4, &user).await.unwrap();
        assert_eq!(updated, user);

        let request = server.await.unwrap();
        assert!(request.starts_with("PUT /users/edit/4 HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_delete_non_success_is_status_error() {
        let (url, server) = serve_once("404 Not Found", r#"{"message":"no such user"}"#).await;

        let err = repo_for(&url).delete(7).await.unwrap_err();
        match err {
            ServiceError::Status { status, body } => {
                assert_eq!(status, 404);
                assert!(body.contains("no such user"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let request = server.await.unwrap();
        assert!(request.starts_with("DELETE /users/delete/7 HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_list_with_garbage_body_is_decode_error() {
        let (url, server) = serve_once("200 OK", "not json").await;
        let err = repo_for(&url).list().await.unwrap_err();
        assert!(matches!(err, ServiceError::Decode(_)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Bind then drop to get a port nothing is listening on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = repo_for(&format!("http://{}", addr)).list().await.unwrap_err();
        assert!(matches!(err, ServiceError::Transport(_)));
    }
}
