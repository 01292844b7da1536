//! REST helpers for communicating with the classification server.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Host-side (tests, non-WASM builds): stubs returning errors since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so a failed
//! request degrades to a toast and a console log, never a crash.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Response body of `DELETE /delete_message/{id}`. The HTTP status conveys
/// transport-level success; `success` conveys whether the server actually
/// removed the record.
#[derive(Debug, Clone, Copy, serde::Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// Endpoint for deleting a single history entry.
pub fn delete_endpoint(id: &str) -> String {
    format!("/delete_message/{id}")
}

/// Submit a message for classification via `POST /` with a form-encoded
/// body, returning the re-rendered page HTML.
///
/// # Errors
///
/// Returns an error string on network failure or a non-2xx response.
pub async fn classify(message: &str) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let form = web_sys::UrlSearchParams::new()
            .map_err(|_| "failed to build form body".to_owned())?;
        form.append("message", message);

        let resp = gloo_net::http::Request::post("/")
            .body(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("classify request failed: {}", resp.status()));
        }
        resp.text().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        Err("not available off the browser".to_owned())
    }
}

/// Delete a history entry via `DELETE /delete_message/{id}`.
///
/// # Errors
///
/// Returns an error string on network failure, a non-2xx response, or a
/// body that does not decode as `{ "success": bool }`.
pub async fn delete_message(id: &str) -> Result<DeleteResponse, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::delete(&delete_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("delete request failed: {}", resp.status()));
        }
        resp.json::<DeleteResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err("not available off the browser".to_owned())
    }
}

/// Fetch the server-rendered page via `GET /`. Used once on mount to pull
/// the initial prediction/history fragments.
///
/// # Errors
///
/// Returns an error string on network failure or a non-2xx response.
pub async fn fetch_page() -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get("/")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("page request failed: {}", resp.status()));
        }
        resp.text().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available off the browser".to_owned())
    }
}
