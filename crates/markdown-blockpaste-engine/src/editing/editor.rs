use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EditorError {
    #[error("Editor has been destroyed")]
    Destroyed,
    #[error("Editor is busy with another operation")]
    Busy,
}

/// Owner of the live editor between mount and unmount.
///
/// The view that mounts the editor keeps the slot; everything else only gets
/// an [`EditorHandle`]. Dropping or unmounting the slot destroys the editor
/// and every outstanding handle starts failing with
/// [`EditorError::Destroyed`].
pub struct EditorSlot<H> {
    host: Option<Rc<RefCell<H>>>,
}

impl<H> EditorSlot<H> {
    pub fn new() -> Self {
        Self { host: None }
    }

    /// Mounts `host`, destroying any editor mounted before it.
    pub fn mount(&mut self, host: H) -> EditorHandle<H> {
        let host = Rc::new(RefCell::new(host));
        let handle = EditorHandle {
            host: Rc::downgrade(&host),
        };
        self.host = Some(host);
        handle
    }

    /// A new handle to the mounted editor, if any.
    pub fn handle(&self) -> Option<EditorHandle<H>> {
        self.host.as_ref().map(|host| EditorHandle {
            host: Rc::downgrade(host),
        })
    }

    pub fn is_mounted(&self) -> bool {
        self.host.is_some()
    }

    /// Destroys the editor and hands back its final state.
    ///
    /// Returns `None` if nothing was mounted, or if an operation was still
    /// running on the editor (its state is dropped when that ends).
    pub fn unmount(&mut self) -> Option<H> {
        let host = self.host.take()?;
        Rc::try_unwrap(host).ok().map(RefCell::into_inner)
    }
}

impl<H> Default for EditorSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Checked reference to a mounted editor.
///
/// Holds no ownership: it can neither keep a destroyed editor alive nor
/// reach it after teardown.
pub struct EditorHandle<H> {
    host: Weak<RefCell<H>>,
}

impl<H> EditorHandle<H> {
    /// Runs `f` with exclusive access to the editor.
    ///
    /// Fails with [`EditorError::Destroyed`] after unmount and with
    /// [`EditorError::Busy`] when called re-entrantly from inside another
    /// `with_host`.
    pub fn with_host<R>(&self, f: impl FnOnce(&mut H) -> R) -> Result<R, EditorError> {
        let host = self.host.upgrade().ok_or(EditorError::Destroyed)?;
        let mut guard = host.try_borrow_mut().map_err(|_| EditorError::Busy)?;
        Ok(f(&mut *guard))
    }

    pub fn is_alive(&self) -> bool {
        self.host.strong_count() > 0
    }
}

impl<H> Clone for EditorHandle<H> {
    fn clone(&self) -> Self {
        Self {
            host: Weak::clone(&self.host),
        }
    }
}
