use std::collections::HashMap;
use std::convert::TryInto;

use super::{
    elem_type::{Endianness, NamedValue, Sign},
    formula::Expr,
    interface::{IBoolean, IFloat, IInteger},
    store::{CacheStore, NodeId, NodeStore, ValueStore},
    Device, GenApiError, GenApiResult, ValueCtxt,
};

pub(super) fn bool_from_id<T: ValueStore, U: CacheStore>(
    node_id: NodeId,
    device: &mut impl Device,
    store: &impl NodeStore,
    cx: &mut ValueCtxt<T, U>,
) -> GenApiResult<bool> {
    if let Some(node) = node_id.as_iboolean_kind(store) {
        node.value(device, store, cx)
    } else if let Some(node) = node_id.as_iinteger_kind(store) {
        Ok(node.value(device, store, cx)? == 1)
    } else {
        Err(GenApiError::InvalidNode(
            "the node doesn't implement `IInteger` nor `IBoolean".into(),
        ))
    }
}

pub(super) fn int_from_slice(
    slice: &[u8],
    endianness: Endianness,
    sign: Sign,
) -> GenApiResult<i64> {
    macro_rules! convert_from_slice {
        ($(($len:literal, $signed_ty:ty, $unsigned_ty:ty)),*) => {
            match (slice.len(), endianness, sign) {
                $(
                    ($len, Endianness::LE, Sign::Signed) => Ok(<$signed_ty>::from_le_bytes(slice.try_into().unwrap()) as i64),
                    ($len, Endianness::LE, Sign::Unsigned) => Ok(<$unsigned_ty>::from_be_bytes(slice.try_into().unwrap()) as i64),
                    ($len, Endianness::BE, Sign::Signed) => Ok(<$signed_ty>::from_be_bytes(slice.try_into().unwrap()) as i64),
                    ($len, Endianness::BE, Sign::Unsigned) => Ok(<$unsigned_ty>::from_be_bytes(slice.try_into().unwrap()) as i64),
                )*
                _ => Err(GenApiError::InvalidBuffer("buffer lenght must be either 1/2/4/8 to convert to i64".into()))
            }
        }
    }

    convert_from_slice!((8, i64, u64), (4, i32, u32), (2, i16, u16), (1, i8, u8))
}

pub(super) fn bytes_from_int(
    value: i64,
    buf: &mut [u8],
    endianness: Endianness,
    sign: Sign,
) -> GenApiResult<()> {
    macro_rules! convert_to_slice {
        ($(($len:literal, $signed_ty:ty, $unsigned_ty:ty)),*) => {
            match (buf.len(), endianness, sign) {
                $(
                    ($len, Endianness::LE, Sign::Signed) => Ok(buf.copy_from_slice(&(value as $signed_ty).to_le_bytes())),
                    ($len, Endianness::LE, Sign::Unsigned) => Ok(buf.copy_from_slice(&(value as $unsigned_ty).to_le_bytes())),
                    ($len, Endianness::BE, Sign::Signed) => Ok(buf.copy_from_slice(&(value as $signed_ty).to_be_bytes())),
                    ($len, Endianness::BE, Sign::Unsigned) => Ok(buf.copy_from_slice(&(value as $unsigned_ty).to_be_bytes())),
                )*
                _ => Err(GenApiError::InvalidBuffer("buffer lenght must be either 1/2/4/8 to convert to i64".into()))
            }
        }
    }

    convert_to_slice!((8, i64, u64), (4, i32, u32), (2, i16, u16), (1, i8, u8))
}

pub(super) fn float_from_slice(slice: &[u8], endianness: Endianness) -> GenApiResult<f64> {
    match (slice.len(), endianness) {
        (4, Endianness::LE) => Ok(f32::from_le_bytes(slice.try_into().unwrap()) as f64),
        (4, Endianness::BE) => Ok(f32::from_be_bytes(slice.try_into().unwrap()) as f64),
        (8, Endianness::LE) => Ok(f64::from_le_bytes(slice.try_into().unwrap())),
        (8, Endianness::BE) => Ok(f64::from_be_bytes(slice.try_into().unwrap())),
        _ => Err(GenApiError::InvalidBuffer(
            "buffer length must be either 4 or 8 to convert to f64".into(),
        )),
    }
}

pub(super) fn bytes_from_float(
    value: f64,
    buf: &mut [u8],
    endianness: Endianness,
) -> GenApiResult<()> {
    match (buf.len(), endianness) {
        (4, Endianness::LE) => Ok(buf.copy_from_slice(&(value as f32).to_le_bytes())),
        (4, Endianness::BE) => Ok(buf.copy_from_slice(&(value as f32).to_be_bytes())),
        (8, Endianness::LE) => Ok(buf.copy_from_slice(&value.to_le_bytes())),
        (8, Endianness::BE) => Ok(buf.copy_from_slice(&value.to_be_bytes())),
        _ => Err(GenApiError::InvalidBuffer(
            "buffer length must be either 4 or 8 to convert to f64".into(),
        )),
    }
}

fn node_value_as_expr<T: ValueStore, U: CacheStore>(
    nid: NodeId,
    device: &mut impl Device,
    store: &impl NodeStore,
    cx: &mut ValueCtxt<T, U>,
) -> GenApiResult<Expr> {
    if let Some(node) = nid.as_iinteger_kind(store) {
        Ok(Expr::from(node.value(device, store, cx)?))
    } else if let Some(node) = nid.as_ifloat_kind(store) {
        Ok(Expr::from(node.value(device, store, cx)?))
    } else if let Some(node) = nid.as_ienumeration_kind(store) {
        Ok(Expr::from(node.current_value(device, store, cx)?))
    } else if let Some(node) = nid.as_iboolean_kind(store) {
        Ok(Expr::from(node.value(device, store, cx)?))
    } else {
        Err(GenApiError::invalid_node(
            "the node pointed to by a formula variable must implement `IInteger`, `IFloat`, `IEnumeration` or `IBoolean`".into(),
        ))
    }
}

/// Collects the variable environment a [`crate::formula::Formula`] needs to evaluate,
/// resolving `pVariable`/`Constant`/`Expression` elements shared by `Converter`,
/// `IntConverter`, `SwissKnife` and `IntSwissKnife` nodes.
pub(super) struct FormulaEnvCollector<'a> {
    p_variables: &'a [NamedValue<NodeId>],
    constants: &'a [NamedValue<f64>],
    expressions: &'a [NamedValue<Expr>],
    extra: HashMap<String, Expr>,
}

impl<'a> FormulaEnvCollector<'a> {
    pub(super) fn new(
        p_variables: &'a [NamedValue<NodeId>],
        constants: &'a [NamedValue<f64>],
        expressions: &'a [NamedValue<Expr>],
    ) -> Self {
        Self {
            p_variables,
            constants,
            expressions,
            extra: HashMap::new(),
        }
    }

    pub(super) fn insert<T: ValueStore, U: CacheStore>(
        &mut self,
        name: impl Into<String>,
        nid: NodeId,
        device: &mut impl Device,
        store: &impl NodeStore,
        cx: &mut ValueCtxt<T, U>,
    ) -> GenApiResult<()> {
        let expr = node_value_as_expr(nid, device, store, cx)?;
        self.extra.insert(name.into(), expr);
        Ok(())
    }

    pub(super) fn insert_imm(&mut self, name: impl Into<String>, value: impl Into<Expr>) {
        self.extra.insert(name.into(), value.into());
    }

    pub(super) fn collect<T: ValueStore, U: CacheStore>(
        &self,
        device: &mut impl Device,
        store: &impl NodeStore,
        cx: &mut ValueCtxt<T, U>,
    ) -> GenApiResult<HashMap<String, Expr>> {
        let mut env = self.extra.clone();

        for constant in self.constants {
            env.insert(constant.name().into(), Expr::from(*constant.value()));
        }

        for expression in self.expressions {
            env.insert(expression.name().into(), expression.value().clone());
        }

        for p_variable in self.p_variables {
            let expr = node_value_as_expr(*p_variable.value(), device, store, cx)?;
            env.insert(p_variable.name().into(), expr);
        }

        Ok(env)
    }
}

pub(super) fn verify_value_in_range<T>(value: T, min: T, max: T) -> GenApiResult<()>
where
    T: PartialOrd,
{
    if value < min {
        Err(GenApiError::InvalidData(
            "given data is smaller than min value of the node".into(),
        ))
    } else if value > max {
        Err(GenApiError::InvalidData(
            "given data is larger than max value of the node".into(),
        ))
    } else {
        Ok(())
    }
}
