//! PostgreSQL implementation of RoomRepository

use async_trait::async_trait;
use sqlx::PgPool;

use honeycomb::{Room, RoomError, RoomRepository};

/// PostgreSQL implementation of RoomRepository
pub struct PgRoomRepository {
    pool: PgPool,
}

impl PgRoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct RoomRow {
    id: i64,
    room_number: String,
    weekday_price: f64,
    weekend_price: f64,
    room_type: String,
    floor: String,
}

impl From<RoomRow> for Room {
    fn from(row: RoomRow) -> Self {
        Self {
            id: row.id,
            room_number: row.room_number,
            weekday_price: row.weekday_price,
            weekend_price: row.weekend_price,
            room_type: row.room_type,
            floor: row.floor,
        }
    }
}

#[async_trait]
impl RoomRepository for PgRoomRepository {
    async fn find_all(&self) -> Result<Vec<Room>, RoomError> {
        let rows = sqlx::query_as::<_, RoomRow>("SELECT * FROM rooms")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RoomError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Room>, RoomError> {
        let row = sqlx::query_as::<_, RoomRow>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RoomError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn find_by_room_number(&self, room_number: &str) -> Result<Option<Room>, RoomError> {
        let row = sqlx::query_as::<_, RoomRow>("SELECT * FROM rooms WHERE room_number = $1")
            .bind(room_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RoomError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn find_by_floor(&self, floor: &str) -> Result<Vec<Room>, RoomError> {
        let rows = sqlx::query_as::<_, RoomRow>("SELECT * FROM rooms WHERE floor = $1")
            .bind(floor)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RoomError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn save(&self, room: &Room) -> Result<Room, RoomError> {
        let row = if room.is_persisted() {
            // Full replace of an existing row
            sqlx::query_as::<_, RoomRow>(
                r#"
                UPDATE rooms
                SET room_number = $2, weekday_price = $3, weekend_price = $4,
                    room_type = $5, floor = $6
                WHERE id = $1
                RETURNING *
                "#,
            )
            .bind(room.id)
            .bind(&room.room_number)
            .bind(room.weekday_price)
            .bind(room.weekend_price)
            .bind(&room.room_type)
            .bind(&room.floor)
            .fetch_one(&self.pool)
            .await
        } else {
            // Insert; the identity column assigns the id
            sqlx::query_as::<_, RoomRow>(
                r#"
                INSERT INTO rooms (room_number, weekday_price, weekend_price, room_type, floor)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING *
                "#,
            )
            .bind(&room.room_number)
            .bind(room.weekday_price)
            .bind(room.weekend_price)
            .bind(&room.room_type)
            .bind(&room.floor)
            .fetch_one(&self.pool)
            .await
        }
        .map_err(|e| RoomError::Repository(e.to_string()))?;

        Ok(row.into())
    }
}
