/// Candidate set bitsets over catalog variant indices
pub mod bitset;
/// Step-driven executor owning catalog, grid, and random state
pub mod executor;
/// Worklist-driven constraint propagation to fixpoint
pub mod propagation;
/// Entropy-guided cell selection and collapse
pub mod selection;
