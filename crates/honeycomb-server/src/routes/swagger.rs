//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{RoomRequest, RoomResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::room::list_rooms,
        super::room::create_room,
        super::room::get_room,
        super::room::update_room,
        super::room::search_by_room_number,
        super::room::search_by_floor,
    ),
    info(
        title = "Honeycomb Room Service API",
        version = "0.1.0",
        description = "CRUD API for hotel room records with validated room-number lookup.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Room", description = "Room management and search"),
    ),
    components(
        schemas(
            RoomRequest,
            RoomResponse,
        )
    ),
)]
pub struct ApiDoc;
