//! Contracts implemented by pooled objects and their collaborators

/// An object a [`ResourcePool`](crate::ResourcePool) can manage
pub trait Poolable {
    /// Called once, when the pool adopts the object
    fn init(&mut self);

    /// Called every time the object returns to the free set
    fn deactivate(&mut self);

    /// Whether the object asks to be taken back by the next sweep
    fn wants_return(&self) -> bool {
        false
    }
}

/// Source of objects that already exist when a pool is built
///
/// The pool takes ownership of whatever `discover` yields and keeps no
/// reference to the scope itself.
pub trait Scope<T> {
    /// Hand over every pre-existing object
    fn discover(&mut self) -> Vec<T>;
}

impl<T> Scope<T> for Vec<T> {
    fn discover(&mut self) -> Vec<T> {
        std::mem::take(self)
    }
}

impl<T, S: Scope<T> + ?Sized> Scope<T> for &mut S {
    fn discover(&mut self) -> Vec<T> {
        (**self).discover()
    }
}

/// Scope with nothing in it
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyScope;

impl<T> Scope<T> for EmptyScope {
    fn discover(&mut self) -> Vec<T> {
        Vec::new()
    }
}

/// Builds new pooled objects during provisioning
///
/// Returning `None` means this attempt produced nothing usable.
pub trait Factory<T> {
    fn create(&mut self) -> Option<T>;
}

impl<T, F> Factory<T> for F
where
    F: FnMut() -> Option<T>,
{
    fn create(&mut self) -> Option<T> {
        self()
    }
}

/// A factory paired with its selection weight
pub struct WeightedFactory<T> {
    weight: u32,
    factory: Box<dyn Factory<T>>,
}

impl<T> WeightedFactory<T> {
    /// Wrap a factory with the given weight
    pub fn new(weight: u32, factory: impl Factory<T> + 'static) -> Self {
        Self {
            weight,
            factory: Box::new(factory),
        }
    }

    /// Wrap a factory with weight 1
    pub fn single(factory: impl Factory<T> + 'static) -> Self {
        Self::new(1, factory)
    }

    /// Selection weight
    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub(crate) fn create(&mut self) -> Option<T> {
        self.factory.create()
    }
}

impl<T> std::fmt::Debug for WeightedFactory<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeightedFactory")
            .field("weight", &self.weight)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_scope_drains() {
        let mut scope = vec![1, 2, 3];
        assert_eq!(Scope::discover(&mut scope), vec![1, 2, 3]);
        assert!(scope.is_empty());
    }

    #[test]
    fn test_closure_factory() {
        let mut next = 0;
        let mut factory = WeightedFactory::new(4, move || {
            next += 1;
            (next % 2 == 0).then_some(next)
        });
        assert_eq!(factory.weight(), 4);
        assert_eq!(factory.create(), None);
        assert_eq!(factory.create(), Some(2));
    }
}
