//! REST operations against the Basin object API.
//!
//! One call is one HTTP request: `save` creates or updates a single
//! object, `remove` deletes one, `load_all` fetches a class. There is no
//! caching, no retry, no offline queue.

use crate::class::Class;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::notify::{Notifier, NoopNotifier};
use crate::object::{KEY_CREATED_AT, KEY_OBJECT_ID, KEY_UPDATED_AT, Object};
use crate::session::Session;
use basin_types::{Acl, PUBLIC};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Header carrying the application id.
const HEADER_APP_ID: &str = "X-Basin-Application-Id";
/// Header carrying the REST API key.
const HEADER_REST_KEY: &str = "X-Basin-REST-API-Key";
/// Header carrying the session token on authenticated writes.
const HEADER_SESSION_TOKEN: &str = "X-Basin-Session-Token";

/// Field stamped with the author's user pointer on authenticated saves.
const AUTHOR_FIELD: &str = "author";
/// Field carrying the access control list on create.
const ACL_FIELD: &str = "ACL";

/// Notice shown when a save or remove fails at the wire.
const NETWORK_FAILURE_NOTICE: &str = "Network error, please try again";

/// Envelope wrapping list results.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    results: Vec<Map<String, Value>>,
}

/// Error body the API sends with non-success statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: Option<i64>,
    error: Option<String>,
}

/// REST client for one Basin application.
pub struct Client {
    config: ClientConfig,
    http: reqwest::Client,
    notifier: Arc<dyn Notifier>,
}

impl Client {
    /// Creates a client that swallows notices.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self::with_notifier(config, Arc::new(NoopNotifier))
    }

    /// Creates a client that reports save/remove outcomes to `notifier`.
    #[must_use]
    pub fn with_notifier(config: ClientConfig, notifier: Arc<dyn Notifier>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to create HTTP client");

        Self {
            config,
            http,
            notifier,
        }
    }

    /// Saves `object`: a create when it has never been on the server, an
    /// update otherwise. On success the instance is re-hydrated in place
    /// from the response, so ids and timestamps are current afterwards.
    ///
    /// `session` must be present for classes that require an author; it is
    /// ignored entirely for public classes, signed in or not. The author
    /// field is stamped on every authenticated save, and newly created
    /// objects get an ACL derived from the class policy.
    pub async fn save(&self, object: &mut Object, session: Option<&Session>) -> ClientResult<()> {
        if let Some(handler) = object.class().handler() {
            handler.before_save(object).map_err(ClientError::Validation)?;
        }

        let class = object.class().clone();
        let author = if class.requires_author() {
            match session {
                Some(session) => Some(session.clone()),
                None => {
                    return Err(ClientError::Auth(format!(
                        "saving a {} object requires a signed-in user",
                        class.name()
                    )));
                }
            }
        } else {
            None
        };

        // Resolve the target before touching the object, so precondition
        // failures leave it unchanged.
        let existing_id = if object.exists_on_server() {
            Some(persisted_id(object)?.to_string())
        } else {
            None
        };

        if let Some(author) = &author {
            object.set(AUTHOR_FIELD, author.user_pointer());
        }

        let mut body = object.fields().clone();
        body.remove(KEY_OBJECT_ID);
        body.remove(KEY_CREATED_AT);
        body.remove(KEY_UPDATED_AT);
        if existing_id.is_none() {
            let acl = create_acl(&class, author.as_ref());
            body.insert(ACL_FIELD.to_string(), serde_json::to_value(&acl)?);
        }

        debug!(
            "Saving {} object ({})",
            class.name(),
            if existing_id.is_some() {
                "update"
            } else {
                "create"
            }
        );

        let mut request = match &existing_id {
            Some(id) => self.http.put(self.object_url(class.name(), id)),
            None => self.http.post(self.class_url(class.name())),
        }
        .header(HEADER_APP_ID, &self.config.app_id)
        .header(HEADER_REST_KEY, &self.config.rest_api_key)
        .json(&body);
        if let Some(author) = &author {
            request = request.header(HEADER_SESSION_TOKEN, &author.session_token);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                self.notify(NETWORK_FAILURE_NOTICE);
                return Err(e.into());
            }
        };
        if !response.status().is_success() {
            self.notify(NETWORK_FAILURE_NOTICE);
            return Err(api_error(response).await);
        }

        let payload: Map<String, Value> = match response.json().await {
            Ok(payload) => payload,
            Err(e) => {
                self.notify(NETWORK_FAILURE_NOTICE);
                return Err(e.into());
            }
        };
        object.hydrate(payload);

        if existing_id.is_some() {
            info!(
                "Updated {} object (id: {})",
                class.name(),
                object.id().unwrap_or("?")
            );
            self.notify(&format!("{} updated", class.name()));
        } else {
            info!(
                "Created {} object (id: {})",
                class.name(),
                object.id().unwrap_or("?")
            );
            self.notify(&format!("{} created", class.name()));
        }

        Ok(())
    }

    /// Deletes `object` on the server.
    ///
    /// The local instance is left untouched, still marked as persisted;
    /// dropping it is the caller's business. Deletes go out with the base
    /// credentials only.
    pub async fn remove(&self, object: &Object) -> ClientResult<()> {
        let id = persisted_id(object)?;
        let class_name = object.class().name();

        debug!("Deleting {} object (id: {})", class_name, id);

        let response = match self
            .http
            .delete(self.object_url(class_name, id))
            .header(HEADER_APP_ID, &self.config.app_id)
            .header(HEADER_REST_KEY, &self.config.rest_api_key)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                self.notify(NETWORK_FAILURE_NOTICE);
                return Err(e.into());
            }
        };
        if !response.status().is_success() {
            self.notify(NETWORK_FAILURE_NOTICE);
            return Err(api_error(response).await);
        }

        info!("Deleted {} object (id: {})", class_name, id);
        self.notify(&format!("{} deleted", class_name));
        Ok(())
    }

    /// Loads the objects of `class` matching `params`, which are forwarded
    /// verbatim as query parameters (`limit`, `order`, `where`, ...).
    ///
    /// Returns a fresh collection in server order. List failures are the
    /// caller's to surface; no notice is shown.
    pub async fn load_all(
        &self,
        class: &Class,
        params: &[(&str, &str)],
    ) -> ClientResult<Vec<Object>> {
        debug!("Loading {} objects", class.name());

        let response = self
            .http
            .get(self.class_url(class.name()))
            .header(HEADER_APP_ID, &self.config.app_id)
            .header(HEADER_REST_KEY, &self.config.rest_api_key)
            .query(params)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let envelope: QueryResponse = response.json().await?;
        let objects: Vec<Object> = envelope
            .results
            .into_iter()
            .map(|payload| Object::from_response(class.clone(), payload))
            .collect();

        info!("Loaded {} {} objects", objects.len(), class.name());
        Ok(objects)
    }

    fn class_url(&self, class_name: &str) -> String {
        format!("{}/classes/{}", self.config.api_base_url, class_name)
    }

    fn object_url(&self, class_name: &str, id: &str) -> String {
        format!("{}/classes/{}/{}", self.config.api_base_url, class_name, id)
    }

    fn notify(&self, message: &str) {
        self.notifier
            .show(message, Duration::from_millis(self.config.notice_duration_ms));
    }
}

/// The server id of a persisted object.
fn persisted_id(object: &Object) -> ClientResult<&str> {
    if !object.exists_on_server() {
        return Err(ClientError::NotPersisted(format!(
            "{} object was never saved",
            object.class().name()
        )));
    }
    object.id().ok_or_else(|| {
        ClientError::NotPersisted(format!("{} object has no id", object.class().name()))
    })
}

/// The ACL attached to newly created objects, derived uniformly from the
/// class policy: public read always, public write for public classes, and
/// read+write for the author when the class requires one.
fn create_acl(class: &Class, author: Option<&Session>) -> Acl {
    let mut acl = Acl::public_read();
    if class.public_write() {
        acl = acl.grant(PUBLIC, true, true);
    }
    if let Some(author) = author {
        acl = acl.grant(author.user_id.as_str(), true, true);
    }
    acl
}

/// Converts a non-success response into [`ClientError::Api`], decoding the
/// service error body (`{"code": .., "error": ".."}`) when there is one.
async fn api_error(response: reqwest::Response) -> ClientError {
    let status = response.status().as_u16();
    let text = response.text().await.unwrap_or_default();
    let (code, message) = match serde_json::from_str::<ApiErrorBody>(&text) {
        Ok(body) => (body.code, body.error.unwrap_or(text)),
        Err(_) => (None, text),
    };

    ClientError::Api {
        status,
        code,
        message,
    }
}
