use actix_web::{http::header, web, HttpResponse};
use crate::{models::StateEvent, state::DashboardState};
use tokio::sync::broadcast::error::RecvError;
use uuid::Uuid;

/// Formats one event as a server-sent-events frame.
pub fn encode_sse(event: &StateEvent) -> Result<String, serde_json::Error> {
    let data = serde_json::to_string(event)?;
    Ok(format!("event: {}\ndata: {}\n\n", event.name(), data))
}

// GET /api/v1/events  (observer: o browser re-renderiza quando chega "user_added")
pub async fn stream_events(state: web::Data<DashboardState>) -> HttpResponse {
    let stream_id = Uuid::new_v4();
    let rx = state.subscribe();
    log::info!("📡 GET /events - subscriber {} connected ({} active)", stream_id, state.subscriber_count());

    let stream = futures::stream::unfold(rx, move |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(event) => match encode_sse(&event) {
                    Ok(frame) => return Some((Ok::<_, std::convert::Infallible>(web::Bytes::from(frame)), rx)),
                    Err(e) => log::error!("❌ Failed to encode {} for {}: {}", event.name(), stream_id, e),
                },
                Err(RecvError::Lagged(skipped)) => {
                    log::warn!("⚠️  Subscriber {} lagged, {} events dropped", stream_id, skipped);
                }
                Err(RecvError::Closed) => {
                    log::info!("📴 Event channel closed for {}", stream_id);
                    return None;
                }
            }
        }
    });

    // Content-Encoding: identity faz o Compress deixar o stream passar sem buffer
    HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .insert_header((header::CONTENT_ENCODING, "identity"))
        .streaming(stream)
}
