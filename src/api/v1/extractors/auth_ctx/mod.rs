/*!
 * Authentication context extractor
 *
 * Responsibility:
 * - Hand the verified identity (AuthCtx) to handlers
 * - Keep axum specifics in core, the contract types in types
 *
 * Public API:
 * - AuthCtx / MaybeAuthCtx
 * - AuthCtxExtractor / MaybeAuthCtxExtractor
 */

mod core;
mod types;

pub use self::core::{AuthCtxExtractor, MaybeAuthCtxExtractor};
pub use self::types::{AuthCtx, MaybeAuthCtx};
