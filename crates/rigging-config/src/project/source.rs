use std::fmt;
use std::sync::Arc;

use crate::env::{Environment, Mode};
use crate::project::Project;
use crate::webpack::BuildConfiguration;

type CustomizeFn = dyn Fn(BuildConfiguration) -> BuildConfiguration + Send + Sync;
type FactoryFn = dyn Fn(Mode, &Environment) -> Project + Send + Sync;

/// Caller-supplied final transform over a synthesized configuration.
#[derive(Clone)]
pub struct Customize(Arc<CustomizeFn>);

impl Customize {
    pub fn new<F>(hook: F) -> Self
    where
        F: Fn(BuildConfiguration) -> BuildConfiguration + Send + Sync + 'static,
    {
        Self(Arc::new(hook))
    }

    pub fn apply(&self, config: BuildConfiguration) -> BuildConfiguration {
        (self.0)(config)
    }
}

impl fmt::Debug for Customize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Customize(..)")
    }
}

/// Where a project descriptor comes from.
///
/// A factory sees the resolved mode and the normalized environment, so a
/// single source can describe different projects per build.
#[derive(Clone)]
pub enum ProjectSource {
    Descriptor(Project),
    Factory(Arc<FactoryFn>),
}

impl ProjectSource {
    pub fn factory<F>(factory: F) -> Self
    where
        F: Fn(Mode, &Environment) -> Project + Send + Sync + 'static,
    {
        ProjectSource::Factory(Arc::new(factory))
    }

    /// Produce the descriptor for one invocation.
    pub fn project(&self, mode: Mode, env: &Environment) -> Project {
        match self {
            ProjectSource::Descriptor(project) => project.clone(),
            ProjectSource::Factory(factory) => factory(mode, env),
        }
    }
}

impl From<Project> for ProjectSource {
    fn from(project: Project) -> Self {
        ProjectSource::Descriptor(project)
    }
}

impl fmt::Debug for ProjectSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectSource::Descriptor(project) => {
                f.debug_tuple("Descriptor").field(project).finish()
            }
            ProjectSource::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}
