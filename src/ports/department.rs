use std::rc::Rc;
use std::sync::Arc;

/// Port for the department collaborator
///
/// Departments live entirely in the embedding system; this crate only ever
/// reads their manager. Implement the trait for whatever handle the embedding
/// system hands out - a borrowed reference, a shared pointer, or a value
/// carrying an identifier. No `Send`/`Sync` bounds: synchronization of shared
/// people and departments is the caller's concern.
pub trait Department {
    /// Value produced by reading the department's manager
    type Manager;

    /// Current manager of this department
    fn manager(&self) -> Self::Manager;
}

// Forwarding impls so a person can hold a department by borrowed reference
// or through the common smart pointers without the embedding system writing
// its own plumbing.

impl<'a, D: Department + ?Sized> Department for &'a D {
    type Manager = D::Manager;

    fn manager(&self) -> Self::Manager {
        (**self).manager()
    }
}

impl<D: Department + ?Sized> Department for Box<D> {
    type Manager = D::Manager;

    fn manager(&self) -> Self::Manager {
        (**self).manager()
    }
}

impl<D: Department + ?Sized> Department for Rc<D> {
    type Manager = D::Manager;

    fn manager(&self) -> Self::Manager {
        (**self).manager()
    }
}

impl<D: Department + ?Sized> Department for Arc<D> {
    type Manager = D::Manager;

    fn manager(&self) -> Self::Manager {
        (**self).manager()
    }
}
