// Copyright 2024 quill-delta-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.


use crate::config::str_slice;
use crate::operations::{DeltaOperation, OpType};
use std::cell::Cell;
use std::option::Option;

/// # DeltaIterator
///
/// Iterator iterating over the content IN the DeltaOperations.
///
/// Hence we do not only iterate over the Objects of type DeltaOperation,
/// but also inside. There are 2 indexes:
///  - index pointing to a DeltaOperation;
///  - offset pointing to a position inside the DeltaOperation.
///
/// For input values, the index may have values
///  - 0 --> first
///  - any usize --> some value in the array
///  - usize::MAX --> end of the list reached
#[allow(clippy::module_name_repetitions)]
pub struct DeltaIterator<'a> {
    ops: &'a Vec<DeltaOperation>, //private list of elements to iterate over
    index: Cell<usize>,           //private index in the vector
    offset: Cell<usize>, //private Position in the string in the DeltaOperation (in case operation == "Insert")
}

impl<'a> DeltaIterator<'a> {
    pub fn new(ops: &'a Vec<DeltaOperation>) -> Self {
        DeltaIterator {
            ops,
            index: Cell::new(0),
            offset: Cell::new(0),
        }
    }

    pub fn has_next(&self) -> bool {
        self.peek_len() < usize::MAX
    }

    /// # peek()
    ///
    /// Returns the delta operation that is next in line to be processed.
    /// But does NOT advance to the next operation.
    ///
    /// # Panics
    /// when internal index offset or index values are wrong
    // Returns the next DeltaOperation
    pub fn peek(&self) -> Option<&DeltaOperation> {
        if self.ops.len() > self.index.get() {
            return Some(self.ops.get(self.index.get()).unwrap());
        }
        None
    }

    /// # next()
    ///
    /// Returns the next operation, and advances the index to the
    /// next operation.
    ///
    /// # Panics
    /// when internal index offset or index values are wrong
    ///
    pub fn next(&self) -> Option<&DeltaOperation> {
        if self.ops.len() > self.index.get() {
            let ret = Some(self.ops.get(self.index.get()).unwrap());
            self.index.set(self.index.get() + 1);
            ret
        } else {
            None
        }
    }

    /// # peek_len()
    ///
    /// Assuming we are on an offset o in an DeltaOperation on Delta operation index i.<br>
    /// We return the remaining length of the Delta operation we point to:
    ///     `op[i].len - offset`
    ///
    /// It should never return 0 if our index is being managed correctly
    ///
    /// # Panics
    /// when internal index offset or index values are wrong
    pub fn peek_len(&self) -> usize {
        if self.ops.len() > self.index.get() {
            self.ops.get(self.index.get()).unwrap().op_len() - self.offset.get()
        } else {
            usize::MAX
        }
    }

    /// # peek_type()
    ///
    /// Returns the `OpType` of the next operation without advancing the index.
    /// # Panics
    /// when internal index offset or index values are wrong
    ///
    // Returns the type of the next DeltaOperation
    pub fn peek_type(&self) -> OpType {
        if self.index.get() < self.ops.len() {
            self.ops.get(self.index.get()).unwrap().op_type()
        } else {
            OpType::Retain
        }
    }

    /// # next_len()
    ///
    /// Returns the next DeltaOperation or a slice thereof
    /// depending on the length of the input parameter len:
    ///
    ///  - If len == 0 the next operation is returned
    ///  - If len > 0 the next operation is returned, or a slice
    ///  - If len takes us past the current DeltaOperation Length, we get the remainder of the DeltaOperation
    ///
    /// # Panics
    /// when internal index offset or index values are wrong
    pub fn next_len(&self, len: usize) -> DeltaOperation {
        let mut length = len;
        if length == 0 {
            length = usize::MAX;
        }

        if self.index.get() < self.ops.len() {
            let offset = self.offset.get();
            let index = self.index.get();
            let next_op = self.ops.get(index).unwrap();

            //Determining the slice we need to take
            let op_length = next_op.op_len();
            let mut act_len = op_length - offset;

            //Updating index for next step
            if length >= act_len {
                //return full DeltaOperation or its remainder
                self.index.set(index + 1);
                self.offset.set(0);
            } else {
                //return slice of the current delta operation
                act_len = length;
                self.offset.set(offset + act_len);
            }

            //returning resulting operation: delete, retain, insert
            match next_op.op_type() {
                OpType::Delete => {
                    let op = DeltaOperation::delete(act_len);
                    return op;
                }
                OpType::Retain => {
                    let mut op = DeltaOperation::retain(act_len);
                    op.set_attributes(next_op.attributes.clone());
                    return op;
                }
                OpType::Insert => {
                    if next_op.is_string() {
                        let s = next_op.string_val().unwrap();
                        let mut op = DeltaOperation::insert(str_slice(s, offset, offset + act_len));
                        op.set_attributes(next_op.attributes.clone());
                        return op;
                    }
                    assert_eq!(offset, 0);
                    assert_eq!(act_len, 1);
                    return next_op.clone();
                }
            }
        }
        DeltaOperation::retain(usize::MAX)
    }

    /// # rest()
    ///
    /// Returns the remainder of the operations stack
    /// to which the iterator points
    ///
    /// Leaves the current values for offset and index unchanged
    pub fn rest(&self) -> Vec<DeltaOperation> {
        if !self.has_next() {
            return Vec::new();
        } else if self.offset.get() == 0 {
            return self.ops[self.index.get()..].to_vec();
        }

        // finish fetching the last bit if we are pointing into the middle of an insert operation
        let mut ret = Vec::new();
        ret.push(self.next_len(usize::MAX));
        if let Some(d) = self.ops.get(self.index.get()..) {
            ret.append(&mut d.to_vec());
        }
        ret
    }
}
