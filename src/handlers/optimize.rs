//! Optimize request-reply handler

use std::sync::Arc;

use anyhow::Result;
use async_nats::{Client, Subscriber};
use futures::StreamExt;
use serde_json::json;
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::services::optimize::{OptimizeError, OptimizeService};
use crate::types::{ErrorResponse, OptimizeRequest, Request, SuccessResponse};

/// Handle optimize messages.
///
/// Each request is answered from its own task so a slow (simulated) solve
/// does not hold up the subscription.
pub async fn handle_optimize(
    client: Client,
    mut subscriber: Subscriber,
    service: Arc<OptimizeService>,
) -> Result<()> {
    while let Some(msg) = subscriber.next().await {
        debug!("Received optimize message");

        let reply = match msg.reply {
            Some(ref reply) => reply.clone(),
            None => {
                warn!("Message without reply subject");
                continue;
            }
        };

        let client = client.clone();
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            let response = process_optimize(&service, &msg.payload).await;
            if let Err(e) = client.publish(reply, response.into()).await {
                error!("Failed to publish optimize reply: {}", e);
            }
        });
    }

    Ok(())
}

/// Turn a raw request payload into the serialized reply
pub(crate) async fn process_optimize(service: &OptimizeService, payload: &[u8]) -> Vec<u8> {
    let request: Request<OptimizeRequest> = match serde_json::from_slice(payload) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse request: {}", e);
            let error = ErrorResponse::new(Uuid::nil(), "INVALID_REQUEST", e.to_string());
            return encode(&error);
        }
    };

    match service.optimize(&request.payload).await {
        Ok(result) => encode(&SuccessResponse::new(request.id, result)),
        Err(e) => {
            let mut error = ErrorResponse::new(request.id, e.code(), e.to_string());
            if let OptimizeError::Validation(ref validation) = e {
                warn!("Rejected optimize request {}: {}", request.id, validation);
                error = error.with_details(json!({ "field": validation.field() }));
            }
            encode(&error)
        }
    }
}

fn encode<T: serde::Serialize>(value: &T) -> Vec<u8> {
    serde_json::to_vec(value).unwrap_or_else(|e| {
        error!("Failed to serialize reply: {}", e);
        br#"{"error":{"code":"INTERNAL_ERROR","message":"Failed to serialize reply"}}"#.to_vec()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::sample_data::nyc_sample;
    use std::time::Duration;

    fn service() -> OptimizeService {
        OptimizeService::new(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_process_optimize_success() {
        let request = Request::new(nyc_sample());
        let payload = serde_json::to_vec(&request).unwrap();

        let reply = process_optimize(&service(), &payload).await;
        let value: serde_json::Value = serde_json::from_slice(&reply).unwrap();

        assert_eq!(value["id"], request.id.to_string());
        assert_eq!(value["payload"]["routes"].as_array().unwrap().len(), 6);
        assert_eq!(value["payload"]["algorithm"], "attention_model");
    }

    #[tokio::test]
    async fn test_process_optimize_validation_error() {
        let mut workspace = nyc_sample();
        workspace.vehicles.clear();
        let request = Request::new(workspace);
        let payload = serde_json::to_vec(&request).unwrap();

        let reply = process_optimize(&service(), &payload).await;
        let value: serde_json::Value = serde_json::from_slice(&reply).unwrap();

        assert_eq!(value["id"], request.id.to_string());
        assert_eq!(value["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(value["error"]["message"], "At least 1 vehicle required");
        assert_eq!(value["error"]["details"]["field"], "vehicles");
    }

    #[tokio::test]
    async fn test_process_optimize_malformed_payload() {
        let reply = process_optimize(&service(), b"{not json").await;
        let value: serde_json::Value = serde_json::from_slice(&reply).unwrap();

        assert_eq!(value["id"], Uuid::nil().to_string());
        assert_eq!(value["error"]["code"], "INVALID_REQUEST");
    }
}
