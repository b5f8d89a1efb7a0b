//! SQLite-backed content store.
//!
//! Implements the [`ContentSource`] read capability plus the write paths
//! used by the admin forms (create post/project, replace-all series save,
//! autosave drafts).

use async_trait::async_trait;
use chrono::{Duration, Utc};
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    Activity, Career, CreatePostRequest, CreateProjectRequest, Draft, Post, Project, ProjectType,
    Role, SaveDraftRequest, Series, SeriesUpsert,
};

use super::{ContentSource, Entry};

/// Days an autosave draft survives before opportunistic purge.
const DRAFT_TTL_DAYS: i64 = 7;

/// SQLite content store for all collections.
#[derive(Clone)]
pub struct SqliteContentStore {
    pool: SqlitePool,
}

impl SqliteContentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== WRITE OPERATIONS ====================

    /// Create a new post. Timestamps are assigned server-side.
    pub async fn create_post(&self, request: &CreatePostRequest) -> Result<Entry<Post>, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        let tags_json = serde_json::to_string(&request.tags)?;

        sqlx::query(
            "INSERT INTO posts (id, author, created_at, updated_at, title, pinned, draft, tags, og_image, series, description) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
        )
        .bind(&id)
        .bind(&request.author)
        .bind(&now)
        .bind(&now)
        .bind(&request.title)
        .bind(request.pinned as i32)
        .bind(request.draft as i32)
        .bind(&tags_json)
        .bind(&request.og_image)
        .bind(&request.series)
        .bind(&request.description)
        .execute(&self.pool)
        .await?;

        Ok(Entry {
            id,
            data: Post {
                author: request.author.clone(),
                created_at: now.clone(),
                updated_at: now,
                title: request.title.clone(),
                pinned: request.pinned,
                draft: request.draft,
                tags: request.tags.clone(),
                og_image: request.og_image.clone(),
                series: request.series.clone(),
                description: request.description.clone(),
            },
        })
    }

    /// Create a new project.
    pub async fn create_project(
        &self,
        request: &CreateProjectRequest,
    ) -> Result<Entry<Project>, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let roles: Vec<&str> = request.roles.iter().map(|r| r.as_str()).collect();
        let roles_json = serde_json::to_string(&roles)?;
        let stack_ids_json = serde_json::to_string(&request.stack_ids)?;

        sqlx::query(
            "INSERT INTO projects (id, project_type, image_url, site_url, roles, company_name, project_name, short_description, started_at, ended_at, stack_ids) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
        )
        .bind(&id)
        .bind(request.project_type.as_str())
        .bind(&request.image_url)
        .bind(&request.site_url)
        .bind(&roles_json)
        .bind(&request.company_name)
        .bind(&request.project_name)
        .bind(&request.short_description)
        .bind(&request.started_at)
        .bind(&request.ended_at)
        .bind(&stack_ids_json)
        .execute(&self.pool)
        .await?;

        Ok(Entry {
            id,
            data: Project {
                project_type: request.project_type,
                image_url: request.image_url.clone(),
                site_url: request.site_url.clone(),
                roles: request.roles.clone(),
                company_name: request.company_name.clone(),
                project_name: request.project_name.clone(),
                short_description: request.short_description.clone(),
                started_at: request.started_at.clone(),
                ended_at: request.ended_at.clone(),
                stack_ids: request.stack_ids.clone(),
            },
        })
    }

    /// Replace the full series list atomically.
    pub async fn save_all_series(&self, series: &[SeriesUpsert]) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM series").execute(&mut *tx).await?;

        for s in series {
            sqlx::query("INSERT INTO series (id, name, og_image) VALUES (?, ?, ?)")
                .bind(&s.id)
                .bind(&s.name)
                .bind(&s.og_image)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Insert an activity. Used for seeding the timeline.
    pub async fn create_activity(&self, activity: &Activity) -> Result<Entry<Activity>, AppError> {
        let id = uuid::Uuid::new_v4().to_string();

        sqlx::query(
            "INSERT INTO activities (id, title, description, url, started_at, ended_at) VALUES (?, ?, ?, ?, ?, ?)"
        )
        .bind(&id)
        .bind(&activity.title)
        .bind(&activity.description)
        .bind(&activity.url)
        .bind(&activity.started_at)
        .bind(&activity.ended_at)
        .execute(&self.pool)
        .await?;

        Ok(Entry {
            id,
            data: activity.clone(),
        })
    }

    /// Insert a career entry. Used for seeding the timeline.
    pub async fn create_career(&self, career: &Career) -> Result<Entry<Career>, AppError> {
        let id = uuid::Uuid::new_v4().to_string();

        sqlx::query(
            "INSERT INTO careers (id, organization_name, role, description, started_at, ended_at) VALUES (?, ?, ?, ?, ?, ?)"
        )
        .bind(&id)
        .bind(&career.organization_name)
        .bind(&career.role)
        .bind(&career.description)
        .bind(&career.started_at)
        .bind(&career.ended_at)
        .execute(&self.pool)
        .await?;

        Ok(Entry {
            id,
            data: career.clone(),
        })
    }

    // ==================== DRAFT OPERATIONS ====================

    /// Save an autosave draft snapshot. Last write wins.
    pub async fn save_draft(
        &self,
        content_id: &str,
        request: &SaveDraftRequest,
    ) -> Result<Draft, AppError> {
        let now = Utc::now().to_rfc3339();
        let form_json = serde_json::to_string(&request.form_data)?;

        sqlx::query(
            "INSERT INTO drafts (content_id, form_data, markdown_content, timestamp) VALUES (?, ?, ?, ?) \
             ON CONFLICT(content_id) DO UPDATE SET form_data = excluded.form_data, \
             markdown_content = excluded.markdown_content, timestamp = excluded.timestamp",
        )
        .bind(content_id)
        .bind(&form_json)
        .bind(&request.markdown_content)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Draft {
            content_id: content_id.to_string(),
            form_data: request.form_data.clone(),
            markdown_content: request.markdown_content.clone(),
            timestamp: now,
        })
    }

    /// Get a draft by content id.
    pub async fn get_draft(&self, content_id: &str) -> Result<Option<Draft>, AppError> {
        let row = sqlx::query(
            "SELECT content_id, form_data, markdown_content, timestamp FROM drafts WHERE content_id = ?",
        )
        .bind(content_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(draft_from_row))
    }

    /// List all drafts, purging entries older than the TTL first.
    pub async fn list_drafts(&self) -> Result<Vec<Draft>, AppError> {
        let cutoff = (Utc::now() - Duration::days(DRAFT_TTL_DAYS)).to_rfc3339();

        sqlx::query("DELETE FROM drafts WHERE timestamp < ?")
            .bind(&cutoff)
            .execute(&self.pool)
            .await?;

        let rows = sqlx::query(
            "SELECT content_id, form_data, markdown_content, timestamp FROM drafts ORDER BY timestamp DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(draft_from_row).collect())
    }

    /// Delete a draft.
    pub async fn delete_draft(&self, content_id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM drafts WHERE content_id = ?")
            .bind(content_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Draft {} not found",
                content_id
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl ContentSource for SqliteContentStore {
    async fn posts(&self) -> Result<Vec<Entry<Post>>, AppError> {
        let rows = sqlx::query(
            "SELECT id, author, created_at, updated_at, title, pinned, draft, tags, og_image, series, description FROM posts"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(post_from_row).collect())
    }

    async fn projects(&self) -> Result<Vec<Entry<Project>>, AppError> {
        let rows = sqlx::query(
            "SELECT id, project_type, image_url, site_url, roles, company_name, project_name, short_description, started_at, ended_at, stack_ids FROM projects"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(project_from_row).collect())
    }

    async fn series(&self) -> Result<Vec<Entry<Series>>, AppError> {
        let rows = sqlx::query("SELECT id, name, og_image FROM series")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(|row| Entry {
                id: row.get("id"),
                data: Series {
                    name: row.get("name"),
                    og_image: row.get::<Option<String>, _>("og_image").unwrap_or_default(),
                },
            })
            .collect())
    }

    async fn activities(&self) -> Result<Vec<Entry<Activity>>, AppError> {
        let rows = sqlx::query(
            "SELECT id, title, description, url, started_at, ended_at FROM activities",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| Entry {
                id: row.get("id"),
                data: Activity {
                    title: row.get("title"),
                    description: row
                        .get::<Option<String>, _>("description")
                        .unwrap_or_default(),
                    url: row.get::<Option<String>, _>("url").unwrap_or_default(),
                    started_at: row.get("started_at"),
                    ended_at: row.get("ended_at"),
                },
            })
            .collect())
    }

    async fn careers(&self) -> Result<Vec<Entry<Career>>, AppError> {
        let rows = sqlx::query(
            "SELECT id, organization_name, role, description, started_at, ended_at FROM careers",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| Entry {
                id: row.get("id"),
                data: Career {
                    organization_name: row.get("organization_name"),
                    role: row.get("role"),
                    description: row
                        .get::<Option<String>, _>("description")
                        .unwrap_or_default(),
                    started_at: row.get("started_at"),
                    ended_at: row.get("ended_at"),
                },
            })
            .collect())
    }
}

// Helper functions for row conversion

fn post_from_row(row: &sqlx::sqlite::SqliteRow) -> Entry<Post> {
    let pinned: i32 = row.get("pinned");
    let draft: i32 = row.get("draft");
    let tags_str: Option<String> = row.get("tags");

    Entry {
        id: row.get("id"),
        data: Post {
            author: row.get("author"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
            title: row.get("title"),
            pinned: pinned != 0,
            draft: draft != 0,
            tags: tags_str.map(|s| parse_json_array(&s)).unwrap_or_default(),
            og_image: row.get::<Option<String>, _>("og_image").unwrap_or_default(),
            series: row.get("series"),
            description: row
                .get::<Option<String>, _>("description")
                .unwrap_or_default(),
        },
    }
}

fn project_from_row(row: &sqlx::sqlite::SqliteRow) -> Entry<Project> {
    let project_type_str: String = row.get("project_type");
    let roles_str: Option<String> = row.get("roles");
    let stack_ids_str: Option<String> = row.get("stack_ids");

    let roles = roles_str
        .map(|s| {
            parse_json_array(&s)
                .iter()
                .filter_map(|r| Role::from_str(r))
                .collect()
        })
        .unwrap_or_default();

    Entry {
        id: row.get("id"),
        data: Project {
            project_type: ProjectType::from_str(&project_type_str)
                .unwrap_or(ProjectType::ToyProject),
            image_url: row
                .get::<Option<String>, _>("image_url")
                .unwrap_or_default(),
            site_url: row.get::<Option<String>, _>("site_url").unwrap_or_default(),
            roles,
            company_name: row
                .get::<Option<String>, _>("company_name")
                .unwrap_or_default(),
            project_name: row.get("project_name"),
            short_description: row
                .get::<Option<String>, _>("short_description")
                .unwrap_or_default(),
            started_at: row.get("started_at"),
            ended_at: row.get("ended_at"),
            stack_ids: stack_ids_str
                .map(|s| serde_json::from_str(&s).unwrap_or_default())
                .unwrap_or_default(),
        },
    }
}

fn draft_from_row(row: &sqlx::sqlite::SqliteRow) -> Draft {
    let form_str: String = row.get("form_data");

    Draft {
        content_id: row.get("content_id"),
        form_data: serde_json::from_str(&form_str).unwrap_or(serde_json::Value::Null),
        markdown_content: row.get("markdown_content"),
        timestamp: row.get("timestamp"),
    }
}

fn parse_json_array(s: &str) -> Vec<String> {
    serde_json::from_str(s).unwrap_or_default()
}
