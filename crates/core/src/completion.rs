//! The completion gate.
//!
//! A bug is "fully reviewed" when it has been both fixed and QA-reviewed.
//! The two fields are edited independently and no ordering is enforced
//! between them; `review_status = reviewed` with an unfixed bug is valid
//! data, just not fully reviewed. The flag drives display treatment only
//! and is never persisted.

use crate::status::{FIX_FIXED, REVIEW_DONE};

/// True iff `fix_status == fixed` and `review_status == reviewed`.
pub fn is_fully_reviewed(fix_status: &str, review_status: &str) -> bool {
    fix_status == FIX_FIXED && review_status == REVIEW_DONE
}
