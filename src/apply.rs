// Copyright 2024 quill-delta-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::delta::Delta;
use crate::document::Document;
use crate::error::Error;
use crate::operations::OpType;
use crate::optransform::OpTransform;

/// Applying a change delta to a document state.
pub trait Apply {
    /// # Errors
    ///
    /// Applies `change` to `self`, a document delta, returning the resulting
    /// document. Fails with [`Error::LengthMismatch`] when `change` retains
    /// or deletes past the end of `self` -- applying it all-or-nothing is
    /// not possible.
    fn apply(&self, change: &Delta) -> Result<Delta, Error>;

    /// Like [`Apply::apply`], but panics instead of returning an error.
    ///
    /// # Panics
    /// Panics when `change` retains or deletes past the end of `self`.
    fn apply_or_panic(&self, change: &Delta) -> Delta;
}

impl Apply for Delta {
    fn apply(&self, change: &Delta) -> Result<Delta, Error> {
        let doc_len = self.document_length();
        let delta_len: usize = change
            .iter()
            .filter(|op| op.op_type() != OpType::Insert)
            .map(|op| op.op_len())
            .sum();

        if delta_len > doc_len {
            return Err(Error::LengthMismatch { doc_len, delta_len });
        }
        self.compose(change)
    }

    fn apply_or_panic(&self, change: &Delta) -> Delta {
        match self.apply(change) {
            Ok(doc) => doc,
            Err(e) => panic!("{e}"),
        }
    }
}
