//! Arena allocator for decorated nodes.
//!
//! Uses `bumpalo` for bump allocation of [`ApiNode`](crate::ApiNode)
//! adapters. All adapters of one decorated document live in the same arena
//! and are freed together when the arena is dropped.

use bumpalo::Bump;

/// Arena allocator for decorated AST nodes.
///
/// The raw JSON document is never touched; decoration allocates a parallel
/// tree of adapters here instead.
///
/// # Example
///
/// ```rust
/// use apib_ast::AstArena;
///
/// let arena = AstArena::new();
/// let value = arena.alloc(42u32);
/// assert_eq!(*value, 42);
/// ```
pub struct AstArena {
    bump: Bump,
}

impl AstArena {
    /// Creates a new arena allocator.
    #[inline]
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Allocates a value in the arena and returns a reference to it.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Allocates a slice in the arena by copying from the input slice.
    #[inline]
    pub fn alloc_slice_copy<T: Copy>(&self, slice: &[T]) -> &[T] {
        self.bump.alloc_slice_copy(slice)
    }

    /// Returns the total bytes allocated in this arena, for logging.
    #[inline]
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}

impl Default for AstArena {
    fn default() -> Self {
        Self::new()
    }
}
