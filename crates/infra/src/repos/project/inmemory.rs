use super::{ICrewRepo, IProjectRepo};
use crate::repos::shared::inmemory_repo::*;
use bauhub_domain::{Crew, Project, ProjectStatus, ID};

pub struct InMemoryProjectRepo {
    projects: std::sync::Mutex<Vec<Project>>,
}

impl InMemoryProjectRepo {
    pub fn new() -> Self {
        Self {
            projects: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IProjectRepo for InMemoryProjectRepo {
    async fn insert(&self, project: &Project) -> anyhow::Result<()> {
        insert(project, &self.projects);
        Ok(())
    }

    async fn save(&self, project: &Project) -> anyhow::Result<()> {
        save(project, &self.projects);
        Ok(())
    }

    async fn find(&self, project_id: &ID) -> Option<Project> {
        find(project_id, &self.projects)
    }

    async fn find_pm_user_id(&self, project_id: &ID) -> Option<ID> {
        find(project_id, &self.projects).and_then(|p: Project| p.pm_user_id)
    }

    async fn find_with_upcoming_start(&self) -> anyhow::Result<Vec<Project>> {
        Ok(find_by(&self.projects, |p| {
            matches!(
                p.status,
                ProjectStatus::Draft | ProjectStatus::Planning | ProjectStatus::Active
            ) && p.start_date.is_some()
                && p.pm_user_id.is_some()
        }))
    }

    async fn find_active_with_end_plan(&self) -> anyhow::Result<Vec<Project>> {
        Ok(find_by(&self.projects, |p| {
            p.status == ProjectStatus::Active
                && p.end_date_plan.is_some()
                && p.pm_user_id.is_some()
        }))
    }
}

pub struct InMemoryCrewRepo {
    crews: std::sync::Mutex<Vec<Crew>>,
}

impl InMemoryCrewRepo {
    pub fn new() -> Self {
        Self {
            crews: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ICrewRepo for InMemoryCrewRepo {
    async fn insert(&self, crew: &Crew) -> anyhow::Result<()> {
        insert(crew, &self.crews);
        Ok(())
    }

    async fn find(&self, crew_id: &ID) -> Option<Crew> {
        find(crew_id, &self.crews)
    }

    async fn find_in_project(&self, crew_id: &ID, project_id: &ID) -> Option<Crew> {
        find_by(&self.crews, |c| {
            &c.id == crew_id && &c.project_id == project_id
        })
        .into_iter()
        .next()
    }
}
