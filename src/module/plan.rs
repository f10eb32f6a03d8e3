use super::Module;
use crate::future::ActionId;

impl Module {
    /// Groups actions into dependency levels.
    ///
    /// Every action in batch `n` depends only on actions in batches `< n`, so an engine
    /// may run each batch concurrently once the previous ones have completed.
    pub fn batches(&self) -> Vec<Vec<ActionId>> {
        let mut levels: Vec<usize> = Vec::with_capacity(self.actions.len());
        for action in &self.actions {
            let level = action
                .dependencies()
                .iter()
                .filter_map(|dep| levels.get(dep.index()))
                .map(|level| level + 1)
                .max()
                .unwrap_or(0);
            levels.push(level);
        }

        let mut batches: Vec<Vec<ActionId>> = Vec::new();
        for (action, level) in self.actions.iter().zip(levels) {
            if batches.len() <= level {
                batches.resize_with(level + 1, Vec::new);
            }
            batches[level].push(action.id);
        }
        batches
    }

    /// Ids of the actions that consume a result of `id`.
    pub fn dependents(&self, id: ActionId) -> Vec<ActionId> {
        self.actions
            .iter()
            .filter(|a| a.dependencies().contains(&id))
            .map(|a| a.id)
            .collect()
    }
}
