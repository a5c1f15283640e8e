// Copyright 2024 quill-delta-rs Developers
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.


use crate::error::Error;
use crate::error::Error::{GetValueWrongType, SerdeNestedMap, SerdeUnknownType};
use crate::types::attr_map::AttrMap;
use anyhow::Result;
use serde_derive::Serialize;
use serde_json::Value;
#[cfg(test)]
use std::fmt;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "Value")]
#[serde(untagged)]
pub enum AttrVal {
    String(String),
    Number(usize),
    Bool(bool),
    Map(AttrMap),
    Null,
}

impl AttrVal {
    /// # Errors
    /// `GetValueWrongType` when the `AttrVal` does not contain this type
    pub fn str_val(&self) -> anyhow::Result<&str, Error> {
        if let AttrVal::String(s) = self {
            return Ok(s.as_str());
        }
        Err(GetValueWrongType {
            tpe: "string".to_string(),
        })
    }
    /// # Errors
    /// `GetValueWrongType` when the `AttrVal` does not contain this type
    pub fn number_val(&self) -> Result<usize, Error> {
        if let AttrVal::Number(s) = self {
            return Ok(*s);
        }
        Err(GetValueWrongType {
            tpe: "number".to_string(),
        })
    }

    /// Note: Calling this function on a String(), or Number() will result in None too
    /// # Errors
    /// `GetValueWrongType` when the `AttrVal` does not contain this type
    pub fn map_val(&self) -> Result<&AttrMap, Error> {
        if let AttrVal::Map(s) = self {
            return Ok(s);
        }
        Err(GetValueWrongType {
            tpe: "map".to_string(),
        })
    }

    /// # Errors
    /// `GetValueWrongType` when the `AttrVal` does not contain this type
    pub fn bool_val(&self) -> Result<bool, Error> {
        if let AttrVal::Bool(s) = self {
            return Ok(*s);
        }
        Err(GetValueWrongType {
            tpe: "boolean".to_string(),
        })
    }

    pub fn is_string(&self) -> bool {
        if let AttrVal::String(_) = self {
            return true;
        }
        false
    }
    pub fn is_number(&self) -> bool {
        if let AttrVal::Number(_) = self {
            return true;
        }
        false
    }
    pub fn is_bool(&self) -> bool {
        if let AttrVal::Bool(_) = self {
            return true;
        }
        false
    }
    pub fn is_null(&self) -> bool {
        if let AttrVal::Null = self {
            return true;
        }
        false
    }
    pub fn is_map(&self) -> bool {
        if let AttrVal::Map(_) = self {
            return true;
        }
        false
    }
}

impl From<String> for AttrVal {
    fn from(s: String) -> Self {
        AttrVal::String(s)
    }
}

impl From<usize> for AttrVal {
    fn from(s: usize) -> Self {
        AttrVal::Number(s)
    }
}

impl From<bool> for AttrVal {
    fn from(s: bool) -> Self {
        AttrVal::Bool(s)
    }
}

impl From<&str> for AttrVal {
    fn from(s: &str) -> Self {
        AttrVal::String(s.to_string())
    }
}

impl From<AttrMap> for AttrVal {
    fn from(s: AttrMap) -> Self {
        AttrVal::Map(s)
    }
}

impl TryFrom<Value> for AttrVal {
    type Error = Error;
    fn try_from(s: Value) -> Result<Self, Self::Error> {
        serde_val_to_attr_val(s, true)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn serde_val_to_attr_val(value: Value, allow_nesting: bool) -> Result<AttrVal, Error> {
    match value {
        Value::Null => Ok(AttrVal::Null),
        Value::String(s) => Ok(AttrVal::String(s)),
        Value::Bool(b) => Ok(AttrVal::Bool(b)),
        Value::Number(n) => {
            let Some(nn) = n.as_u64() else {
                return Err(Error::NotAnUnsigned);
            };
            Ok(AttrVal::Number(nn as usize))
        }
        Value::Object(o) => {
            if allow_nesting {
                Ok(AttrVal::Map(serde_val_to_map(o, allow_nesting)?))
            } else {
                Err(SerdeNestedMap {
                    value: Value::Object(o).to_string(),
                })
            }
        }
        Value::Array(_) => Err(SerdeUnknownType {
            tpe: value.to_string(),
        }),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn serde_val_to_map(
    value: serde_json::map::Map<String, Value>,
    allow_nesting: bool,
) -> Result<AttrMap, Error> {
    let mut att = AttrMap::default();
    for (kk, vv) in value {
        let k = kk.to_string();
        let v = match vv {
            Value::Null => AttrVal::Null,
            Value::String(s) => AttrVal::String(s),
            Value::Bool(b) => AttrVal::Bool(b),
            Value::Number(n) => {
                let Some(nn) = n.as_u64() else {
                    return Err(Error::NotAnUnsigned);
                };
                AttrVal::Number(nn as usize)
            }
            Value::Object(o) => {
                if allow_nesting {
                    serde_val_to_attr_val(Value::Object(o), allow_nesting)?
                } else {
                    return Err(SerdeNestedMap {
                        value: Value::Object(o).to_string(),
                    });
                }
            }
            Value::Array(_) => {
                return Err(SerdeUnknownType {
                    tpe: vv.to_string(),
                })
            }
        };
        att.insert(k, v);
    }

    Ok(att)
}

#[cfg(test)]
impl fmt::Display for AttrVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_attrval(self, f)
    }
}
#[cfg(test)]
fn fmt_attrval(attrval: &AttrVal, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match attrval {
        AttrVal::Null => {
            write!(f, "Null")
        }
        AttrVal::Number(u) => {
            write!(f, "{u}")
        }
        AttrVal::String(s) => {
            write!(f, "{s}")
        }
        AttrVal::Bool(b) => {
            write!(f, "{b}")
        }
        AttrVal::Map(m) => {
            let mut out = String::new();
            for (k, v) in &**m {
                out.push_str(&format!("({k}->{v}), "));
            }
            write!(f, "{out}")
        }
    }
}
