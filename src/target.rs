use crate::{
    environment::Environment,
    error::{Error, Result},
};

pub type Action = Box<dyn Fn(&Environment) -> Result<()>>;

pub struct CustomTarget {
    pub name: String,
    /// Path pattern, substituted against the environment on each run
    pub dependency: String,
    pub action: Action,
    pub title: String,
    pub description: String,
    pub always_build: bool,
}

/// On-demand targets, kept in registration order
#[derive(Default)]
pub struct Targets {
    targets: Vec<CustomTarget>,
}

impl Targets {
    pub fn new() -> Self {
        Default::default()
    }

    /// Registers a target, replacing any target with the same name
    pub fn add_custom_target<F>(
        &mut self,
        name: &str,
        dependency: &str,
        action: F,
        title: &str,
        description: &str,
        always_build: bool,
    ) where
        F: Fn(&Environment) -> Result<()> + 'static,
    {
        let target = CustomTarget {
            name: name.to_string(),
            dependency: dependency.to_string(),
            action: Box::new(action),
            title: title.to_string(),
            description: description.to_string(),
            always_build,
        };

        match self.targets.iter_mut().find(|t| t.name == name) {
            Some(existing) => *existing = target,
            None => self.targets.push(target),
        }
    }

    pub fn get(&self, name: &str) -> Option<&CustomTarget> {
        self.targets.iter().find(|target| target.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CustomTarget> {
        self.targets.iter()
    }

    /// Runs a target every time it is asked for
    pub fn run(&self, name: &str, environment: &Environment) -> Result<()> {
        let target = self
            .get(name)
            .ok_or_else(|| Error::UnknownTarget(name.to_string()))?;

        let dependency = environment.subst(&target.dependency)?;
        log::debug!("{}: depends on {}", target.name, dependency);

        log::info!("{}: {}", target.title, target.description);
        (target.action)(environment)
    }
}
