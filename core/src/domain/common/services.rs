use std::sync::Arc;

use crate::domain::nutrition::ports::NutritionRepository;

/// Entry point for every meal plan evaluation.
///
/// Holds no mutable state: each call is a pure function of its arguments and
/// the read-only nutrition reference, so one instance can be shared freely
/// across tasks.
#[derive(Debug)]
pub struct Service<N>
where
    N: NutritionRepository,
{
    pub(crate) nutrition_repository: Arc<N>,
}

impl<N> Service<N>
where
    N: NutritionRepository,
{
    pub fn new(nutrition_repository: N) -> Self {
        Self {
            nutrition_repository: Arc::new(nutrition_repository),
        }
    }
}

impl<N> Clone for Service<N>
where
    N: NutritionRepository,
{
    fn clone(&self) -> Self {
        Self {
            nutrition_repository: Arc::clone(&self.nutrition_repository),
        }
    }
}
