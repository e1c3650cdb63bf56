use crate::dto::candidate_dto::{CandidateListQuery, CreateCandidatePayload};
use crate::error::{Error, Result};
use crate::models::candidate::Candidate;
use sqlx::PgPool;
use uuid::Uuid;

/// Closed set of sort keys accepted by the list endpoint. Anything else,
/// including an absent or empty value, falls back to creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    CreationTime,
}

impl SortField {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "firstname" => SortField::FirstName,
            "lastname" => SortField::LastName,
            "email" => SortField::Email,
            "phonenumber" => SortField::PhoneNumber,
            _ => SortField::CreationTime,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            SortField::FirstName => "first_name",
            SortField::LastName => "last_name",
            SortField::Email => "email",
            SortField::PhoneNumber => "phone_number",
            SortField::CreationTime => "creation_time",
        }
    }
}

/// LIKE patterns for the free-text filter: lowercased for the name
/// concatenation and email, verbatim for the phone number.
pub fn search_patterns(search: &str) -> (String, String) {
    (
        format!("%{}%", search.to_lowercase()),
        format!("%{}%", search),
    )
}

#[derive(Clone)]
pub struct CandidateService {
    pool: PgPool,
}

impl CandidateService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Filtered, sorted, paginated read. The total count is taken over the
    /// filtered set before the page window is applied.
    pub async fn list(&self, query: &CandidateListQuery) -> Result<(Vec<Candidate>, i64)> {
        let limit = query.max_result_count.unwrap_or(10).max(0);
        let offset = query.skip_count.unwrap_or(0).max(0);

        let search = query.search_text.as_deref().map(str::trim).unwrap_or("");
        let mut where_clause = String::new();
        let mut args: Vec<String> = Vec::new();

        if !search.is_empty() {
            where_clause = "WHERE (LOWER(first_name || ' ' || last_name) LIKE $1 \
                 OR LOWER(email) LIKE $1 \
                 OR phone_number LIKE $2)"
                .to_string();
            let (folded, verbatim) = search_patterns(search);
            args.push(folded);
            args.push(verbatim);
        }

        let sort = SortField::parse(query.sorting.as_deref().unwrap_or(""));
        let direction = if query.is_descending { "DESC" } else { "ASC" };

        let items_query = format!(
            "SELECT * FROM candidates {} ORDER BY {} {} LIMIT ${} OFFSET ${}",
            where_clause,
            sort.column(),
            direction,
            args.len() + 1,
            args.len() + 2,
        );
        let total_query = format!("SELECT COUNT(*) FROM candidates {}", where_clause);

        let mut items_statement = sqlx::query_as::<_, Candidate>(&items_query);
        for value in &args {
            items_statement = items_statement.bind(value);
        }
        items_statement = items_statement.bind(limit).bind(offset);
        let items = items_statement.fetch_all(&self.pool).await?;

        let mut total_statement = sqlx::query_scalar::<_, i64>(&total_query);
        for value in &args {
            total_statement = total_statement.bind(value);
        }
        let total = total_statement.fetch_one(&self.pool).await?;

        Ok((items, total))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Candidate>> {
        let candidate = sqlx::query_as::<_, Candidate>("SELECT * FROM candidates WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(candidate)
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<Candidate>> {
        let candidate = sqlx::query_as::<_, Candidate>("SELECT * FROM candidates WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(candidate)
    }

    /// Persists a new record. Email uniqueness is the caller's concern; the
    /// unique index rejects a duplicate that slips past the caller's check.
    pub async fn create(&self, payload: &CreateCandidatePayload) -> Result<Candidate> {
        let candidate = sqlx::query_as::<_, Candidate>(
            r#"
            INSERT INTO candidates (
                first_name, last_name, phone_number, email,
                call_time_interval, linked_in_profile_url, git_hub_profile_url, comments
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .bind(&payload.phone_number)
        .bind(&payload.email)
        .bind(&payload.call_time_interval)
        .bind(&payload.linked_in_profile_url)
        .bind(&payload.git_hub_profile_url)
        .bind(&payload.comments)
        .fetch_one(&self.pool)
        .await?;
        Ok(candidate)
    }

    /// Full overwrite of all mutable fields, identified by id.
    pub async fn update(&self, id: Uuid, payload: &CreateCandidatePayload) -> Result<Candidate> {
        let candidate = sqlx::query_as::<_, Candidate>(
            r#"
            UPDATE candidates
            SET first_name = $2,
                last_name = $3,
                phone_number = $4,
                email = $5,
                call_time_interval = $6,
                linked_in_profile_url = $7,
                git_hub_profile_url = $8,
                comments = $9,
                last_updated = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&payload.first_name)
        .bind(&payload.last_name)
        .bind(&payload.phone_number)
        .bind(&payload.email)
        .bind(&payload.call_time_interval)
        .bind(&payload.linked_in_profile_url)
        .bind(&payload.git_hub_profile_url)
        .bind(&payload.comments)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Candidate not found with the specified id.".to_string()))?;
        Ok(candidate)
    }

    /// Deleting an id that is not present is a no-op at this layer.
    pub async fn delete(&self, id: Uuid) -> Result<u64> {
        let res = sqlx::query("DELETE FROM candidates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }
}
