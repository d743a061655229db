//! Project KPI database operations
//!
//! project_id is unique: at most one KPI record per project, checked
//! before insert.

use crate::error::{Error, Result};
use crate::models::{NewProjectKpi, ProjectKpi, ProjectKpiUpdate};
use sqlx::SqlitePool;

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<ProjectKpi>> {
    let kpi = sqlx::query_as::<_, ProjectKpi>("SELECT * FROM project_kpis WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(kpi)
}

pub async fn get_by_project(pool: &SqlitePool, project_id: i64) -> Result<Option<ProjectKpi>> {
    let kpi = sqlx::query_as::<_, ProjectKpi>("SELECT * FROM project_kpis WHERE project_id = ?")
        .bind(project_id)
        .fetch_optional(pool)
        .await?;
    Ok(kpi)
}

pub async fn list(pool: &SqlitePool, skip: i64, limit: i64) -> Result<Vec<ProjectKpi>> {
    let kpis =
        sqlx::query_as::<_, ProjectKpi>("SELECT * FROM project_kpis ORDER BY id LIMIT ? OFFSET ?")
            .bind(limit)
            .bind(skip)
            .fetch_all(pool)
            .await?;
    Ok(kpis)
}

pub async fn create(pool: &SqlitePool, new: NewProjectKpi) -> Result<ProjectKpi> {
    if get_by_project(pool, new.project_id).await?.is_some() {
        return Err(Error::Duplicate(format!(
            "KPI record already exists for project ID {}",
            new.project_id
        )));
    }

    let result = sqlx::query(
        r#"
        INSERT INTO project_kpis (
            project_id, completion_percentage, milestone_completion, budget_utilization,
            schedule_variance, overdue_tasks, alert_count, avg_task_completion_time,
            employee_workload_index, customer_priority_level, reopened_tasks, risk_flag, kpi_class
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(new.project_id)
    .bind(new.completion_percentage)
    .bind(new.milestone_completion)
    .bind(new.budget_utilization)
    .bind(new.schedule_variance)
    .bind(new.overdue_tasks)
    .bind(new.alert_count)
    .bind(new.avg_task_completion_time)
    .bind(new.employee_workload_index)
    .bind(new.customer_priority_level)
    .bind(new.reopened_tasks)
    .bind(new.risk_flag)
    .bind(&new.kpi_class)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    get(pool, id)
        .await?
        .ok_or_else(|| Error::Internal("KPI row missing after insert".into()))
}

/// Apply a merge-patch: only supplied fields change
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    patch: ProjectKpiUpdate,
) -> Result<Option<ProjectKpi>> {
    let Some(mut kpi) = get(pool, id).await? else {
        return Ok(None);
    };

    if let Some(completion_percentage) = patch.completion_percentage {
        kpi.completion_percentage = completion_percentage;
    }
    if let Some(milestone_completion) = patch.milestone_completion {
        kpi.milestone_completion = milestone_completion;
    }
    if let Some(budget_utilization) = patch.budget_utilization {
        kpi.budget_utilization = budget_utilization;
    }
    if let Some(schedule_variance) = patch.schedule_variance {
        kpi.schedule_variance = schedule_variance;
    }
    if let Some(overdue_tasks) = patch.overdue_tasks {
        kpi.overdue_tasks = overdue_tasks;
    }
    if let Some(alert_count) = patch.alert_count {
        kpi.alert_count = alert_count;
    }
    if let Some(avg_task_completion_time) = patch.avg_task_completion_time {
        kpi.avg_task_completion_time = avg_task_completion_time;
    }
    if let Some(employee_workload_index) = patch.employee_workload_index {
        kpi.employee_workload_index = employee_workload_index;
    }
    if let Some(customer_priority_level) = patch.customer_priority_level {
        kpi.customer_priority_level = customer_priority_level;
    }
    if let Some(reopened_tasks) = patch.reopened_tasks {
        kpi.reopened_tasks = reopened_tasks;
    }
    if let Some(risk_flag) = patch.risk_flag {
        kpi.risk_flag = risk_flag;
    }
    if let Some(kpi_class) = patch.kpi_class {
        kpi.kpi_class = kpi_class;
    }

    write_back(pool, &kpi).await?;
    Ok(Some(kpi))
}

/// Persist the derived classification label
pub async fn set_kpi_class(pool: &SqlitePool, id: i64, kpi_class: &str) -> Result<()> {
    sqlx::query("UPDATE project_kpis SET kpi_class = ? WHERE id = ?")
        .bind(kpi_class)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

async fn write_back(pool: &SqlitePool, kpi: &ProjectKpi) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE project_kpis
        SET completion_percentage = ?, milestone_completion = ?, budget_utilization = ?,
            schedule_variance = ?, overdue_tasks = ?, alert_count = ?,
            avg_task_completion_time = ?, employee_workload_index = ?,
            customer_priority_level = ?, reopened_tasks = ?, risk_flag = ?, kpi_class = ?
        WHERE id = ?
        "#,
    )
    .bind(kpi.completion_percentage)
    .bind(kpi.milestone_completion)
    .bind(kpi.budget_utilization)
    .bind(kpi.schedule_variance)
    .bind(kpi.overdue_tasks)
    .bind(kpi.alert_count)
    .bind(kpi.avg_task_completion_time)
    .bind(kpi.employee_workload_index)
    .bind(kpi.customer_priority_level)
    .bind(kpi.reopened_tasks)
    .bind(kpi.risk_flag)
    .bind(&kpi.kpi_class)
    .bind(kpi.id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM project_kpis WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
