use crate::config::AppConfig;
use crate::db;
use crate::error::Result;

use super::Student;

/// Insert a new student and return the generated id.
///
/// A duplicate email surfaces as `RosterError::DuplicateEmail`. Inputs are
/// passed through as-is; the table's constraints are the validation layer.
pub async fn create(config: &AppConfig, name: &str, email: &str) -> Result<i32> {
    let mut conn = db::connect(config).await?;
    let result = sqlx::query_scalar::<_, i32>(
        "INSERT INTO students(name, email) VALUES($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(email)
    .fetch_one(&mut conn)
    .await;
    db::close(conn).await;
    Ok(result?)
}

/// All students, ordered by ascending id. An empty table is an empty vec.
pub async fn list(config: &AppConfig) -> Result<Vec<Student>> {
    let mut conn = db::connect(config).await?;
    let result = sqlx::query_as::<_, Student>(
        "SELECT id, name, email, created_at FROM students ORDER BY id",
    )
    .fetch_all(&mut conn)
    .await;
    db::close(conn).await;
    Ok(result?)
}

/// Update whichever fields are supplied on one student. Returns the
/// rows-affected count; 0 means no matching row or nothing to set, and is
/// not an error. With neither field supplied no statement runs at all.
pub async fn update(
    config: &AppConfig,
    id: i32,
    name: Option<&str>,
    email: Option<&str>,
) -> Result<u64> {
    let Some(sql) = update_sql(name.is_some(), email.is_some()) else {
        return Ok(0);
    };

    let mut query = sqlx::query(&sql);
    if let Some(name) = name {
        query = query.bind(name);
    }
    if let Some(email) = email {
        query = query.bind(email);
    }
    query = query.bind(id);

    let mut conn = db::connect(config).await?;
    let result = query.execute(&mut conn).await;
    db::close(conn).await;
    Ok(result?.rows_affected())
}

/// Delete one student by id. Returns the rows-affected count; 0 means no
/// matching row, not an error.
pub async fn delete(config: &AppConfig, id: i32) -> Result<u64> {
    let mut conn = db::connect(config).await?;
    let result = sqlx::query("DELETE FROM students WHERE id = $1")
        .bind(id)
        .execute(&mut conn)
        .await;
    db::close(conn).await;
    Ok(result?.rows_affected())
}

/// Build the UPDATE statement for whichever fields are being set, with the
/// id always bound last. `None` when there is nothing to set.
fn update_sql(set_name: bool, set_email: bool) -> Option<String> {
    let mut assignments = Vec::new();
    if set_name {
        assignments.push(format!("name = ${}", assignments.len() + 1));
    }
    if set_email {
        assignments.push(format!("email = ${}", assignments.len() + 1));
    }
    if assignments.is_empty() {
        return None;
    }
    let id_slot = assignments.len() + 1;
    Some(format!(
        "UPDATE students SET {} WHERE id = ${id_slot}",
        assignments.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::update_sql;

    #[test]
    fn update_sql_skips_when_nothing_is_set() {
        assert_eq!(update_sql(false, false), None);
    }

    #[test]
    fn update_sql_single_field() {
        assert_eq!(
            update_sql(true, false).as_deref(),
            Some("UPDATE students SET name = $1 WHERE id = $2")
        );
        assert_eq!(
            update_sql(false, true).as_deref(),
            Some("UPDATE students SET email = $1 WHERE id = $2")
        );
    }

    #[test]
    fn update_sql_both_fields() {
        assert_eq!(
            update_sql(true, true).as_deref(),
            Some("UPDATE students SET name = $1, email = $2 WHERE id = $3")
        );
    }
}
