//! MySQL implementation of the BookingRepository trait.
//!
//! The state-filtered queries mirror the BookingState predicate in SQL:
//! time-based states compare the caller's `now` against the booking
//! window, status states compare the stored status column.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlArguments;
use sqlx::query::Query;
use sqlx::{MySql, MySqlPool, Row};
use uuid::Uuid;

use si_core::domain::entities::{Booking, BookingStatus};
use si_core::domain::value_objects::BookingState;
use si_core::errors::{DomainError, DomainResult};
use si_core::repositories::BookingRepository;
use si_shared::types::Pagination;

const SELECT_COLUMNS: &str = "id, start_date, end_date, item_id, booker_id, status";

/// MySQL implementation of BookingRepository
pub struct MySqlBookingRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlBookingRepository {
    /// Create a new MySQL booking repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Booking entity
    fn row_to_booking(row: &sqlx::mysql::MySqlRow) -> DomainResult<Booking> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database(format!("Failed to get id: {}", e)))?;
        let item_id: String = row
            .try_get("item_id")
            .map_err(|e| DomainError::Database(format!("Failed to get item_id: {}", e)))?;
        let booker_id: String = row
            .try_get("booker_id")
            .map_err(|e| DomainError::Database(format!("Failed to get booker_id: {}", e)))?;
        let status: String = row
            .try_get("status")
            .map_err(|e| DomainError::Database(format!("Failed to get status: {}", e)))?;

        Ok(Booking {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            start: row
                .try_get::<DateTime<Utc>, _>("start_date")
                .map_err(|e| DomainError::Database(format!("Failed to get start_date: {}", e)))?,
            end: row
                .try_get::<DateTime<Utc>, _>("end_date")
                .map_err(|e| DomainError::Database(format!("Failed to get end_date: {}", e)))?,
            item_id: Uuid::parse_str(&item_id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            booker_id: Uuid::parse_str(&booker_id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            status: BookingStatus::parse(&status)
                .ok_or_else(|| DomainError::Database(format!("Unknown status: {}", status)))?,
        })
    }

    /// SQL condition appended for a state filter; the binds are added by
    /// `bind_state` in the same order
    fn state_condition(state: BookingState) -> &'static str {
        match state {
            BookingState::All => "",
            BookingState::Current => " AND start_date <= ? AND end_date >= ?",
            BookingState::Past => " AND end_date < ?",
            BookingState::Future => " AND start_date > ?",
            BookingState::Waiting | BookingState::Rejected | BookingState::Cancelled => {
                " AND status = ?"
            }
        }
    }

    fn bind_state<'q>(
        query: Query<'q, MySql, MySqlArguments>,
        state: BookingState,
        now: DateTime<Utc>,
    ) -> Query<'q, MySql, MySqlArguments> {
        match state {
            BookingState::All => query,
            BookingState::Current => query.bind(now).bind(now),
            BookingState::Past | BookingState::Future => query.bind(now),
            BookingState::Waiting | BookingState::Rejected | BookingState::Cancelled => {
                query.bind(state.as_str())
            }
        }
    }
}

#[async_trait]
impl BookingRepository for MySqlBookingRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Booking>> {
        let query = format!(
            "SELECT {} FROM bookings WHERE id = ? LIMIT 1",
            SELECT_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_booking(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, booking: Booking) -> DomainResult<Booking> {
        let query = r#"
            INSERT INTO bookings (id, start_date, end_date, item_id, booker_id, status)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(booking.id.to_string())
            .bind(booking.start)
            .bind(booking.end)
            .bind(booking.item_id.to_string())
            .bind(booking.booker_id.to_string())
            .bind(booking.status.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to create booking: {}", e)))?;

        Ok(booking)
    }

    async fn update(&self, booking: Booking) -> DomainResult<Booking> {
        let query = r#"
            UPDATE bookings SET
                start_date = ?,
                end_date = ?,
                status = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(booking.start)
            .bind(booking.end)
            .bind(booking.status.as_str())
            .bind(booking.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to update booking: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!("Booking id={}", booking.id)));
        }

        Ok(booking)
    }

    async fn find_by_booker(
        &self,
        booker_id: Uuid,
        state: BookingState,
        now: DateTime<Utc>,
        page: Pagination,
    ) -> DomainResult<Vec<Booking>> {
        let query = format!(
            "SELECT {} FROM bookings WHERE booker_id = ?{} ORDER BY start_date DESC LIMIT ? OFFSET ?",
            SELECT_COLUMNS,
            Self::state_condition(state)
        );

        let bound = Self::bind_state(
            sqlx::query(&query).bind(booker_id.to_string()),
            state,
            now,
        );

        let rows = bound
            .bind(page.limit_i64())
            .bind(page.offset_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_booking).collect()
    }

    async fn find_by_items(
        &self,
        item_ids: &[Uuid],
        state: BookingState,
        now: DateTime<Utc>,
        page: Pagination,
    ) -> DomainResult<Vec<Booking>> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; item_ids.len()].join(", ");
        let query = format!(
            "SELECT {} FROM bookings WHERE item_id IN ({}){} ORDER BY start_date DESC LIMIT ? OFFSET ?",
            SELECT_COLUMNS,
            placeholders,
            Self::state_condition(state)
        );

        let mut bound = sqlx::query(&query);
        for id in item_ids {
            bound = bound.bind(id.to_string());
        }
        bound = Self::bind_state(bound, state, now);

        let rows = bound
            .bind(page.limit_i64())
            .bind(page.offset_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_booking).collect()
    }

    async fn find_last_for_item(
        &self,
        item_id: Uuid,
        now: DateTime<Utc>,
    ) -> DomainResult<Option<Booking>> {
        let query = format!(
            "SELECT {} FROM bookings WHERE item_id = ? AND start_date <= ? ORDER BY end_date DESC LIMIT 1",
            SELECT_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(item_id.to_string())
            .bind(now)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_booking(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_next_for_item(
        &self,
        item_id: Uuid,
        now: DateTime<Utc>,
    ) -> DomainResult<Option<Booking>> {
        let query = format!(
            "SELECT {} FROM bookings WHERE item_id = ? AND start_date > ? ORDER BY start_date ASC LIMIT 1",
            SELECT_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(item_id.to_string())
            .bind(now)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_booking(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_finished_approved(
        &self,
        item_id: Uuid,
        booker_id: Uuid,
        now: DateTime<Utc>,
    ) -> DomainResult<Option<Booking>> {
        let query = format!(
            "SELECT {} FROM bookings WHERE item_id = ? AND booker_id = ? AND status = ? AND end_date < ? LIMIT 1",
            SELECT_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(item_id.to_string())
            .bind(booker_id.to_string())
            .bind(BookingStatus::Approved.as_str())
            .bind(now)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_booking(&row)?)),
            None => Ok(None),
        }
    }
}
