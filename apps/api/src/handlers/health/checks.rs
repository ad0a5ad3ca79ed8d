use super::*;

pub(super) async fn check_postgres(pool: &sqlx::PgPool) -> HealthDependencyStatus {
    let check = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await;

    match check {
        Ok(_) => HealthDependencyStatus {
            backend: "postgres",
            status: "ok",
            detail: None,
        },
        Err(error) => HealthDependencyStatus {
            backend: "postgres",
            status: "error",
            detail: Some(format!("postgres check failed: {error}")),
        },
    }
}

pub(super) fn in_process_status(backend: &'static str) -> HealthDependencyStatus {
    HealthDependencyStatus {
        backend,
        status: "ok",
        detail: None,
    }
}
