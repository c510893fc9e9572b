use color_eyre::eyre::eyre;
use sqlx::SqlitePool;

use crate::domain::{
    MemberIds, MembershipChange, Project, ProjectDetails, ProjectId,
    ProjectStore, ProjectStoreError, UserId,
};

// Rows written by older clients can hold text such as '' or '12,5' in the
// REAL columns. Those read back as NULL.
#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: i64,
    nombre_proyecto: Option<String>,
    usuario_instagram: Option<String>,
    tickets: Option<String>,
    tarifa_setter: Option<f64>,
    objetivo_ventas: Option<f64>,
    facturacion_estimada: Option<f64>,
    usuarios: Option<String>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project::new(
            ProjectId::new(row.id),
            ProjectDetails {
                name: row.nombre_proyecto,
                owner_handle: row.usuario_instagram,
                ticket_info: row.tickets,
                setter_rate: row.tarifa_setter,
                sales_goal: row.objetivo_ventas,
                estimated_revenue: row.facturacion_estimada,
                member_ids: MemberIds::from(row.usuarios),
            },
        )
    }
}

pub struct SqliteProjectStore {
    pool: SqlitePool,
}

impl SqliteProjectStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn unexpected(e: sqlx::Error) -> ProjectStoreError {
    ProjectStoreError::UnexpectedError(eyre!(e))
}

#[async_trait::async_trait]
impl ProjectStore for SqliteProjectStore {
    #[tracing::instrument(name = "Adding project to SQLite", skip_all)]
    async fn add_project(
        &mut self,
        details: ProjectDetails,
    ) -> Result<Project, ProjectStoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO proyectos (
                nombre_proyecto, usuario_instagram, tickets, tarifa_setter,
                objetivo_ventas, facturacion_estimada, usuarios
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&details.name)
        .bind(&details.owner_handle)
        .bind(&details.ticket_info)
        .bind(details.setter_rate)
        .bind(details.sales_goal)
        .bind(details.estimated_revenue)
        .bind(details.member_ids.encode())
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;

        Ok(Project::new(
            ProjectId::new(result.last_insert_rowid()),
            details,
        ))
    }

    #[tracing::instrument(name = "Getting project from SQLite", skip_all)]
    async fn get_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Project, ProjectStoreError> {
        sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, nombre_proyecto, usuario_instagram, tickets,
                   CASE WHEN typeof(tarifa_setter) IN ('real', 'integer')
                        THEN CAST(tarifa_setter AS REAL) END AS tarifa_setter,
                   CASE WHEN typeof(objetivo_ventas) IN ('real', 'integer')
                        THEN CAST(objetivo_ventas AS REAL) END AS objetivo_ventas,
                   CASE WHEN typeof(facturacion_estimada) IN ('real', 'integer')
                        THEN CAST(facturacion_estimada AS REAL) END AS facturacion_estimada,
                   usuarios
            FROM proyectos
            WHERE id = ?1
            "#,
        )
        .bind(project_id.as_ref())
        .fetch_one(&self.pool)
        .await
        .map(Project::from)
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => ProjectStoreError::ProjectNotFound,
            err => unexpected(err),
        })
    }

    #[tracing::instrument(name = "Getting project list from SQLite", skip_all)]
    async fn get_projects(&self) -> Result<Vec<Project>, ProjectStoreError> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, nombre_proyecto, usuario_instagram, tickets,
                   CASE WHEN typeof(tarifa_setter) IN ('real', 'integer')
                        THEN CAST(tarifa_setter AS REAL) END AS tarifa_setter,
                   CASE WHEN typeof(objetivo_ventas) IN ('real', 'integer')
                        THEN CAST(objetivo_ventas AS REAL) END AS objetivo_ventas,
                   CASE WHEN typeof(facturacion_estimada) IN ('real', 'integer')
                        THEN CAST(facturacion_estimada AS REAL) END AS facturacion_estimada,
                   usuarios
            FROM proyectos
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(unexpected)?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    #[tracing::instrument(name = "Updating project in SQLite", skip_all)]
    async fn update_project(
        &mut self,
        project_id: &ProjectId,
        details: ProjectDetails,
    ) -> Result<u64, ProjectStoreError> {
        let result = sqlx::query(
            r#"
            UPDATE proyectos
            SET nombre_proyecto = ?1, usuario_instagram = ?2, tickets = ?3,
                tarifa_setter = ?4, objetivo_ventas = ?5,
                facturacion_estimada = ?6, usuarios = ?7
            WHERE id = ?8
            "#,
        )
        .bind(&details.name)
        .bind(&details.owner_handle)
        .bind(&details.ticket_info)
        .bind(details.setter_rate)
        .bind(details.sales_goal)
        .bind(details.estimated_revenue)
        .bind(details.member_ids.encode())
        .bind(project_id.as_ref())
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;

        Ok(result.rows_affected())
    }

    #[tracing::instrument(name = "Updating estimated revenue in SQLite", skip_all)]
    async fn update_estimated_revenue(
        &mut self,
        project_id: &ProjectId,
        estimated_revenue: Option<f64>,
    ) -> Result<u64, ProjectStoreError> {
        let result = sqlx::query(
            r#"
            UPDATE proyectos SET facturacion_estimada = ?1 WHERE id = ?2
            "#,
        )
        .bind(estimated_revenue)
        .bind(project_id.as_ref())
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;

        Ok(result.rows_affected())
    }

    #[tracing::instrument(name = "Deleting project from SQLite", skip_all)]
    async fn delete_project(
        &mut self,
        project_id: &ProjectId,
    ) -> Result<u64, ProjectStoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM proyectos WHERE id = ?1
            "#,
        )
        .bind(project_id.as_ref())
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;

        Ok(result.rows_affected())
    }

    #[tracing::instrument(name = "Adding member to project in SQLite", skip_all)]
    async fn add_member(
        &mut self,
        project_id: &ProjectId,
        user_id: &UserId,
    ) -> Result<MembershipChange, ProjectStoreError> {
        let mut tx = self.pool.begin().await.map_err(unexpected)?;

        // A write as the first statement takes the database write lock
        // before the member list is read, so concurrent appends queue here.
        let claimed = sqlx::query(
            r#"
            UPDATE proyectos SET usuarios = usuarios WHERE id = ?1
            "#,
        )
        .bind(project_id.as_ref())
        .execute(&mut *tx)
        .await
        .map_err(unexpected)?;

        if claimed.rows_affected() == 0 {
            return Err(ProjectStoreError::ProjectNotFound);
        }

        let current = sqlx::query_scalar::<_, Option<String>>(
            r#"
            SELECT usuarios FROM proyectos WHERE id = ?1
            "#,
        )
        .bind(project_id.as_ref())
        .fetch_one(&mut *tx)
        .await
        .map_err(unexpected)?;

        let mut member_ids = MemberIds::from(current);
        if !member_ids.push_unique(user_id) {
            tx.commit().await.map_err(unexpected)?;
            return Ok(MembershipChange::AlreadyMember(member_ids));
        }

        sqlx::query(
            r#"
            UPDATE proyectos SET usuarios = ?1 WHERE id = ?2
            "#,
        )
        .bind(member_ids.encode())
        .bind(project_id.as_ref())
        .execute(&mut *tx)
        .await
        .map_err(unexpected)?;

        tx.commit().await.map_err(unexpected)?;

        Ok(MembershipChange::Added(member_ids))
    }
}
