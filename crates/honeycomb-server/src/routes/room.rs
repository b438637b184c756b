//! Room Routes - CRUD and Search
//!
//! HTTP handlers that delegate to RoomService for business logic. This layer
//! owns the status-code mapping: client failures from the service become 404
//! (the mapping the API has always used, also for malformed input), anything
//! from the store becomes 500. It also resolves the update target: the id
//! always comes from the path, and a missing room 404s before the service is
//! asked to save.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::models::{RoomRequest, RoomResponse};
use crate::AppState;

use honeycomb::{Room, RoomError};

/// Query string for the by-room-number search; the parameter is optional so
/// its absence reaches the service as a validation failure instead of a
/// framework-level 400.
#[derive(Debug, Deserialize)]
pub struct RoomNumberQuery {
    #[serde(rename = "roomNumber")]
    pub room_number: Option<String>,
}

/// Query string for the by-floor search
#[derive(Debug, Deserialize)]
pub struct FloorQuery {
    pub floor: String,
}

fn to_response(e: RoomError) -> (StatusCode, String) {
    if e.is_client_error() {
        (StatusCode::NOT_FOUND, e.to_string())
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    }
}

/// List all rooms
#[utoipa::path(
    get,
    path = "/rooms",
    responses(
        (status = 200, description = "List of all rooms", body = Vec<RoomResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Room"
)]
pub async fn list_rooms(
    State(state): State<AppState>,
) -> Result<Json<Vec<RoomResponse>>, (StatusCode, String)> {
    let rooms = state
        .room_service
        .list_all()
        .await
        .map_err(to_response)?;

    Ok(Json(rooms.into_iter().map(RoomResponse::from).collect()))
}

/// Get a room by id
#[utoipa::path(
    get,
    path = "/rooms/{id}",
    params(("id" = i64, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room found", body = RoomResponse),
        (status = 404, description = "Room not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Room"
)]
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RoomResponse>, (StatusCode, String)> {
    let room = state
        .room_service
        .find_room(id)
        .await
        .map_err(to_response)?
        .ok_or((StatusCode::NOT_FOUND, "Room not found".to_string()))?;

    Ok(Json(room.into()))
}

/// Search for a room by its room number
#[utoipa::path(
    get,
    path = "/rooms/search/byRoomNumber",
    params(("roomNumber" = Option<String>, Query, description = "Digits-only room number")),
    responses(
        (status = 200, description = "Room found", body = RoomResponse),
        (status = 404, description = "Room number malformed or no such room"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Room"
)]
pub async fn search_by_room_number(
    State(state): State<AppState>,
    Query(query): Query<RoomNumberQuery>,
) -> Result<Json<RoomResponse>, (StatusCode, String)> {
    let room = state
        .room_service
        .find_by_room_number(query.room_number.as_deref())
        .await
        .map_err(to_response)?;

    Ok(Json(room.into()))
}

/// Search for rooms on a floor
#[utoipa::path(
    get,
    path = "/rooms/search/byFloor",
    params(("floor" = String, Query, description = "Floor identifier")),
    responses(
        (status = 200, description = "Rooms on the floor, possibly empty", body = Vec<RoomResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Room"
)]
pub async fn search_by_floor(
    State(state): State<AppState>,
    Query(query): Query<FloorQuery>,
) -> Result<Json<Vec<RoomResponse>>, (StatusCode, String)> {
    let rooms = state
        .room_service
        .find_by_floor(&query.floor)
        .await
        .map_err(to_response)?;

    Ok(Json(rooms.into_iter().map(RoomResponse::from).collect()))
}

/// Create a new room
#[utoipa::path(
    post,
    path = "/rooms",
    request_body = RoomRequest,
    responses(
        (status = 201, description = "Room created", body = RoomResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Room"
)]
pub async fn create_room(
    State(state): State<AppState>,
    Json(payload): Json<RoomRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let room = state
        .room_service
        .add_room(payload.into())
        .await
        .map_err(to_response)?;

    let location = format!("/rooms/{}", room.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(RoomResponse::from(room)),
    ))
}

/// Update an existing room (full replace)
#[utoipa::path(
    put,
    path = "/rooms/{id}",
    params(("id" = i64, Path, description = "Room ID")),
    request_body = RoomRequest,
    responses(
        (status = 200, description = "Room updated", body = RoomResponse),
        (status = 404, description = "Room not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Room"
)]
pub async fn update_room(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<RoomRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    // The service saves unconditionally, so the existence check lives here.
    state
        .room_service
        .find_room(id)
        .await
        .map_err(to_response)?
        .ok_or((StatusCode::NOT_FOUND, "Room not found".to_string()))?;

    let room = Room {
        id,
        ..payload.into()
    };
    let room = state
        .room_service
        .update_room(room)
        .await
        .map_err(to_response)?;

    let location = format!("/rooms/{}", room.id);

    Ok((
        StatusCode::OK,
        [(header::LOCATION, location)],
        Json(RoomResponse::from(room)),
    ))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(list_rooms).post(create_room))
        .route("/rooms/search/byRoomNumber", get(search_by_room_number))
        .route("/rooms/search/byFloor", get(search_by_floor))
        .route("/rooms/:id", get(get_room).put(update_room))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::application::RoomService;

    use honeycomb::RoomRepository;

    /// In-memory repository double; counts save calls, and can be switched
    /// to fail every operation.
    #[derive(Default)]
    struct StubRooms {
        rooms: Mutex<Vec<Room>>,
        saves: AtomicUsize,
        fail: bool,
    }

    impl StubRooms {
        fn seeded(rooms: Vec<Room>) -> Self {
            Self {
                rooms: Mutex::new(rooms),
                ..Default::default()
            }
        }

        fn broken() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn check(&self) -> Result<(), RoomError> {
            if self.fail {
                Err(RoomError::Repository("connection reset".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl RoomRepository for StubRooms {
        async fn find_all(&self) -> Result<Vec<Room>, RoomError> {
            self.check()?;
            Ok(self.rooms.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Room>, RoomError> {
            self.check()?;
            Ok(self
                .rooms
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.id == id)
                .cloned())
        }

        async fn find_by_room_number(&self, room_number: &str) -> Result<Option<Room>, RoomError> {
            self.check()?;
            Ok(self
                .rooms
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.room_number == room_number)
                .cloned())
        }

        async fn find_by_floor(&self, floor: &str) -> Result<Vec<Room>, RoomError> {
            self.check()?;
            Ok(self
                .rooms
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.floor == floor)
                .cloned()
                .collect())
        }

        async fn save(&self, room: &Room) -> Result<Room, RoomError> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            self.check()?;
            let mut rooms = self.rooms.lock().unwrap();
            if room.is_persisted() {
                if let Some(existing) = rooms.iter_mut().find(|r| r.id == room.id) {
                    *existing = room.clone();
                }
                Ok(room.clone())
            } else {
                let next_id = rooms.iter().map(|r| r.id).max().unwrap_or(0) + 1;
                let saved = Room {
                    id: next_id,
                    ..room.clone()
                };
                rooms.push(saved.clone());
                Ok(saved)
            }
        }
    }

    fn sample_room(id: i64, number: &str, floor: &str) -> Room {
        Room {
            id,
            room_number: number.to_string(),
            weekday_price: 102.00,
            weekend_price: 135.00,
            room_type: "double".to_string(),
            floor: floor.to_string(),
        }
    }

    fn app(repo: Arc<StubRooms>) -> Router {
        let service = RoomService::new(repo as Arc<dyn RoomRepository>);
        let state = AppState {
            room_service: Arc::new(service),
        };
        router().with_state(state)
    }

    fn room_body(number: &str, weekday: f64) -> Body {
        Body::from(
            serde_json::json!({
                "roomNumber": number,
                "weekdayPrice": weekday,
                "weekendPrice": 135.00,
                "roomType": "double",
                "floor": "2",
            })
            .to_string(),
        )
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_create_room_returns_201_with_location() {
        let app = app(Arc::new(StubRooms::default()));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/rooms")
                    .header("content-type", "application/json")
                    .body(room_body("202", 102.00))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::LOCATION], "/rooms/1");

        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["id"], 1);
        assert_eq!(body["roomNumber"], "202");
    }

    #[tokio::test]
    async fn test_update_missing_room_is_404_and_never_saves() {
        let repo = Arc::new(StubRooms::default());
        let app = app(repo.clone());

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/rooms/42")
                    .header("content-type", "application/json")
                    .body(room_body("202", 102.00))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(repo.saves.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_update_uses_path_id_over_body_id() {
        let repo = Arc::new(StubRooms::seeded(vec![sample_room(1, "202", "2")]));
        let app = app(repo.clone());

        // The body smuggles in an id; only the path id may win.
        let body = Body::from(
            serde_json::json!({
                "id": 999,
                "roomNumber": "202",
                "weekdayPrice": 120.00,
                "weekendPrice": 135.00,
                "roomType": "double",
                "floor": "2",
            })
            .to_string(),
        );
        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/rooms/1")
                    .header("content-type", "application/json")
                    .body(body)
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::LOCATION], "/rooms/1");

        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["id"], 1);

        let rooms = repo.rooms.lock().unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].id, 1);
        assert_eq!(rooms[0].weekday_price, 120.00);
    }

    #[tokio::test]
    async fn test_search_maps_invalid_number_to_404_with_message() {
        let app = app(Arc::new(StubRooms::default()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/rooms/search/byRoomNumber?roomNumber=-100")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_string(response).await,
            "Room number: -100, is an invalid room number format."
        );
    }

    #[tokio::test]
    async fn test_search_maps_absent_number_to_404_with_null_message() {
        let app = app(Arc::new(StubRooms::default()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/rooms/search/byRoomNumber")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_string(response).await,
            "Room number: null, is an invalid room number format."
        );
    }

    #[tokio::test]
    async fn test_search_maps_missing_room_to_404_with_message() {
        let app = app(Arc::new(StubRooms::default()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/rooms/search/byRoomNumber?roomNumber=100")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(response).await, "Room number: 100, does not exist.");
    }

    #[tokio::test]
    async fn test_search_finds_existing_room() {
        let app = app(Arc::new(StubRooms::seeded(vec![sample_room(1, "202", "2")])));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/rooms/search/byRoomNumber?roomNumber=202")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["id"], 1);
        assert_eq!(body["roomNumber"], "202");
    }

    #[tokio::test]
    async fn test_get_missing_room_is_404() {
        let app = app(Arc::new(StubRooms::default()));

        let response = app
            .oneshot(Request::builder().uri("/rooms/1").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_repository_failure_maps_to_500() {
        let app = app(Arc::new(StubRooms::broken()));

        let response = app
            .oneshot(Request::builder().uri("/rooms").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
