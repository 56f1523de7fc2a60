//! This module contains types which implement either one of `IInterface` defined in `GenICam
//! Starndard`.

use gencam_genapi::{
    elem_type::{DisplayNotation, FloatRepresentation, IntegerRepresentation},
    interface::IncrementMode,
    prelude::*,
    GenApiResult, NodeId,
};

use super::{DeviceControl, GenApiCtxt, GenApiDevice, ParamsCtxt};

/// A node that has `IInteger` interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntegerNode(pub(super) NodeId);

/// A node that has `IFloat` interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloatNode(pub(super) NodeId);

/// A node that has `IString` interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StringNode(pub(super) NodeId);

/// A node that has `IBoolean` interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BooleanNode(pub(super) NodeId);

/// A node that has `ICommand` interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandNode(pub(super) NodeId);

/// A node that has `IRegister` interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegisterNode(pub(super) NodeId);

/// A node that has `IPort` interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortNode(pub(super) NodeId);

/// A node that has `ICategory` interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryNode(pub(super) NodeId);

/// A node that has `IEnumeration` interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumerationNode(pub(super) NodeId);

/// One entry of an [`EnumerationNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumEntryNode(pub(super) NodeId);

/// A node whose concrete `GenApi` interface isn't known yet.
///
/// Obtained via [`ParamsCtxt::node`], then narrowed down to one of the typed node kinds with
/// `as_integer`, `as_float`, etc. Which conversion succeeds depends on the interface the vendor's
/// `GenApi` XML actually assigns to the node: `GenApi SFNC` only recommends an interface, it
/// doesn't mandate one, so more than one conversion may need to be tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node(pub(super) NodeId);

macro_rules! delegate {
    (
        $expect_kind:ident,
        $(
            $(#[$meta:meta])*
            $vis:vis fn $method:ident<$Ctrl:ident, $Ctxt:ident>($self:ident, ctxt: &mut ParamsCtxt<Ctrl, Ctxt> $(,$arg:ident: $arg_ty:ty)*) -> $ret_ty:ty,)*) => {
        $(
            $(#[$meta])*
            $vis fn $method<$Ctrl, $Ctxt>($self $(,$arg: $arg_ty)*, ctxt: &mut ParamsCtxt<$Ctrl, $Ctxt>) -> $ret_ty
            where $Ctrl: DeviceControl,
                  $Ctxt: GenApiCtxt
            {
                ctxt.enter(|ctrl, ctxt| {
                    ctxt.enter(|node_store, value_ctxt| {
                        $self.0
                            .$expect_kind(node_store)
                            .unwrap()
                            .$method($($arg,)* &mut GenApiDevice::new(ctrl), node_store, value_ctxt)
                    })
                })
            }
        )*
    };

    (
        no_vc,
        $expect_kind:ident,
        $(
            $(#[$meta:meta])*
            $vis:vis fn $method:ident<$Ctrl:ident, $Ctxt:ident>($self:ident, ctxt: &mut ParamsCtxt<Ctrl, Ctxt> $(,$arg:ident: $arg_ty:ty)*) -> $ret_ty:ty,)*) => {
        $(
            $(#[$meta])*
            $vis fn $method<$Ctrl, $Ctxt>($self $(,$arg: $arg_ty)*, ctxt: &mut ParamsCtxt<$Ctrl, $Ctxt>) -> $ret_ty
            where $Ctrl: DeviceControl,
                  $Ctxt: GenApiCtxt
            {
                ctxt.enter(|_, ctxt| {
                    ctxt.enter(|node_store, _| {
                        $self.0
                            .$expect_kind(node_store)
                            .unwrap()
                            .$method($($arg,)*  node_store)
                    })
                })
            }
        )*
    };


}

impl IntegerNode {
    delegate!(
        expect_iinteger_kind,
        /// Returns integer value of the node.
        pub fn value<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<i64>,
        /// Sets integer value of the node.
        pub fn set_value<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>, value: i64) -> GenApiResult<()>,
        /// Returns minimum value which the node accepts.
        pub fn min<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<i64>,
        /// Restricts minimum value of the node.
        pub fn set_min<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>, value: i64) -> GenApiResult<()>,
        /// Returns maximum value which the node accepts.
        pub fn max<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<i64>,
        /// Restricts maximum value of the node.
        pub fn set_max<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>, value: i64) -> GenApiResult<()>,
        /// Returns the increment value if `inc_mode` returns IncrementMode::FixedIncrement. The value
        /// to set must be `min + i * Increment`.
        ///
        /// NOTE: Some nodes like `MaskedIntReg` doesn't have this element, though `IInteger`
        /// defines getter of the value.
        pub fn inc<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<Option<i64>>,
        /// Returns `true` if the node is readable.
        pub fn is_readable<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<bool>,
        /// Returns `true` if the node is writable.
        pub fn is_writable<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<bool>,
    );
    delegate!(
       no_vc,
       expect_iinteger_kind,
       /// Returns [`IncrementMode`] of the node.
       pub fn inc_mode<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> Option<IncrementMode>,
       /// Returns [`IntegerRepresentation`] of the node.
       pub fn representation<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> IntegerRepresentation,
    );

    /// Returns the nodes that are selected when this node is used as a selector, i.e. the nodes
    /// that declare this node in their `pSelected` element.
    pub fn selecting_nodes<Ctrl, Ctxt>(self, ctxt: &ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<Vec<Node>>
    where
        Ctxt: GenApiCtxt,
    {
        let store = ctxt.node_store();
        Ok(self
            .0
            .expect_iselector_kind(store)?
            .selecting_nodes(store)?
            .iter()
            .copied()
            .map(Node)
            .collect())
    }
}

impl FloatNode {
    delegate!(
        expect_ifloat_kind,
        /// Returns float value of the node.
        pub fn value<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<f64>,
        /// Sets float value of the node.
        pub fn set_value<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>, value: f64) -> GenApiResult<()>,
        /// Returns minimum value which the node accepts.
        pub fn min<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<f64>,
        /// Restricts minimum value of the node.
        pub fn set_min<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>, value: f64) -> GenApiResult<()>,
        /// Returns maximum value which the node accepts.
        pub fn max<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<f64>,
        /// Restricts maximum value of the node.
        pub fn set_max<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>, value: f64) -> GenApiResult<()>,
        /// Returns the increment value if `inc_mode` returns `IncrementMode::FixedIncrement`.
        pub fn inc<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<Option<f64>>,
        /// Returns `true` if the node is readable.
        pub fn is_readable<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<bool>,
        /// Returns `true` if the node is writable.
        pub fn is_writable<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<bool>,
    );
    delegate!(
        no_vc,
        expect_ifloat_kind,
        /// Returns [`IncrementMode`] of the node.
        pub fn inc_mode<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> Option<IncrementMode>,
        /// Returns [`FloatRepresentation`] of the node.
        pub fn representation<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> FloatRepresentation,
        /// Returns [`DisplayNotation`] of the node.
        pub fn display_notation<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> DisplayNotation,
        /// Returns the number of digits to show after the decimal point when displaying the value.
        pub fn display_precision<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> i64,
    );
}

impl StringNode {
    delegate!(
        expect_istring_kind,
        /// Returns the value of the node.
        pub fn value<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<String>,
        /// Sets the value of the node.
        pub fn set_value<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>, value: String) -> GenApiResult<()>,
        /// Returns the maximum length of the string that the node accepts.
        pub fn max_length<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<i64>,
        /// Returns `true` if the node is readable.
        pub fn is_readable<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<bool>,
        /// Returns `true` if the node is writable.
        pub fn is_writable<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<bool>,
    );
}

impl BooleanNode {
    delegate!(
        expect_iboolean_kind,
        /// Returns the value of the node.
        pub fn value<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<bool>,
        /// Sets the value of the node.
        pub fn set_value<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>, value: bool) -> GenApiResult<()>,
        /// Returns `true` if the node is readable.
        pub fn is_readable<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<bool>,
        /// Returns `true` if the node is writable.
        pub fn is_writable<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<bool>,
    );

    /// Returns the nodes that are selected when this node is used as a selector, i.e. the nodes
    /// that declare this node in their `pSelected` element.
    pub fn selecting_nodes<Ctrl, Ctxt>(self, ctxt: &ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<Vec<Node>>
    where
        Ctxt: GenApiCtxt,
    {
        let store = ctxt.node_store();
        Ok(self
            .0
            .expect_iselector_kind(store)?
            .selecting_nodes(store)?
            .iter()
            .copied()
            .map(Node)
            .collect())
    }
}

impl CommandNode {
    delegate!(
        expect_icommand_kind,
        /// Executes the command.
        pub fn execute<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<()>,
        /// Returns `true` if the command has completed.
        pub fn is_done<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<bool>,
        /// Returns `true` if the node is writable, i.e. can be executed.
        pub fn is_writable<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<bool>,
    );
}

impl RegisterNode {
    delegate!(
        expect_iregister_kind,
        /// Reads bytes from the register into `buf`.
        ///
        /// `buf.len()` must be the same as the register length returned from [`RegisterNode::length`].
        pub fn read<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>, buf: &mut [u8]) -> GenApiResult<()>,
        /// Writes bytes from `buf` to the register.
        ///
        /// `buf.len()` must be the same as the register length returned from [`RegisterNode::length`].
        pub fn write<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>, buf: &[u8]) -> GenApiResult<()>,
        /// Returns the address of the register.
        pub fn address<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<i64>,
        /// Returns the length of the register in bytes.
        pub fn length<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<i64>,
    );
}

impl PortNode {
    delegate!(
        expect_iport_kind,
        /// Reads bytes at `address` into `buf`.
        pub fn read<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>, address: i64, buf: &mut [u8]) -> GenApiResult<()>,
        /// Writes bytes in `buf` at `address`.
        pub fn write<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>, address: i64, buf: &[u8]) -> GenApiResult<()>,
    );
}

impl CategoryNode {
    /// Returns the nodes grouped under this category.
    pub fn nodes<Ctrl, Ctxt>(self, ctxt: &ParamsCtxt<Ctrl, Ctxt>) -> Vec<Node>
    where
        Ctxt: GenApiCtxt,
    {
        let store = ctxt.node_store();
        self.0
            .expect_icategory_kind(store)
            .unwrap()
            .nodes(store)
            .iter()
            .copied()
            .map(Node)
            .collect()
    }
}

impl EnumEntryNode {
    /// Returns the symbolic name of the entry, as it appears in the `GenApi` XML.
    pub fn name<Ctrl, Ctxt>(self, ctxt: &ParamsCtxt<Ctrl, Ctxt>) -> String
    where
        Ctxt: GenApiCtxt,
    {
        let store = ctxt.node_store();
        self.0.expect_enum_entry(store).unwrap().name().to_string()
    }

    /// Returns the integer value the entry maps to.
    pub fn value<Ctrl, Ctxt>(self, ctxt: &ParamsCtxt<Ctrl, Ctxt>) -> i64
    where
        Ctxt: GenApiCtxt,
    {
        let store = ctxt.node_store();
        self.0.expect_enum_entry(store).unwrap().value()
    }

    /// Returns the displayable symbolic string of the entry, if any.
    pub fn symbolic<Ctrl, Ctxt>(self, ctxt: &ParamsCtxt<Ctrl, Ctxt>) -> Option<String>
    where
        Ctxt: GenApiCtxt,
    {
        let store = ctxt.node_store();
        self.0
            .expect_enum_entry(store)
            .unwrap()
            .symbolic()
            .map(ToString::to_string)
    }
}

impl EnumerationNode {
    /// Returns the entries defined on this node.
    pub fn entries<Ctrl, Ctxt>(self, ctxt: &ParamsCtxt<Ctrl, Ctxt>) -> Vec<EnumEntryNode>
    where
        Ctxt: GenApiCtxt,
    {
        let store = ctxt.node_store();
        self.0
            .expect_ienumeration_kind(store)
            .unwrap()
            .entries(store)
            .iter()
            .copied()
            .map(EnumEntryNode)
            .collect()
    }

    /// Returns the entry with the given symbolic name, if one exists.
    pub fn entry_by_symbolic<Ctrl, Ctxt>(
        self,
        ctxt: &ParamsCtxt<Ctrl, Ctxt>,
        name: &str,
    ) -> Option<EnumEntryNode>
    where
        Ctxt: GenApiCtxt,
    {
        let store = ctxt.node_store();
        self.0
            .expect_ienumeration_kind(store)
            .unwrap()
            .entry_by_symbolic(name, store)
            .map(EnumEntryNode)
    }

    /// Returns the currently selected entry.
    pub fn current_entry<Ctrl, Ctxt>(
        self,
        ctxt: &mut ParamsCtxt<Ctrl, Ctxt>,
    ) -> GenApiResult<EnumEntryNode>
    where
        Ctrl: DeviceControl,
        Ctxt: GenApiCtxt,
    {
        ctxt.enter(|ctrl, ctxt| {
            ctxt.enter(|node_store, value_ctxt| {
                let id = self
                    .0
                    .expect_ienumeration_kind(node_store)
                    .unwrap()
                    .current_entry(&mut GenApiDevice::new(ctrl), node_store, value_ctxt)?;
                Ok(EnumEntryNode(id))
            })
        })
    }

    delegate!(
        expect_ienumeration_kind,
        /// Returns the integer value of the currently selected entry.
        pub fn current_value<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<i64>,
        /// Selects the entry with the given symbolic name.
        pub fn set_entry_by_symbolic<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>, name: &str) -> GenApiResult<()>,
        /// Selects the entry with the given integer value.
        pub fn set_entry_by_value<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>, value: i64) -> GenApiResult<()>,
        /// Returns `true` if the node is readable.
        pub fn is_readable<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<bool>,
        /// Returns `true` if the node is writable.
        pub fn is_writable<Ctrl, Ctxt>(self, ctxt: &mut ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<bool>,
    );

    /// Returns the nodes that are selected when this node is used as a selector, i.e. the nodes
    /// that declare this node in their `pSelected` element.
    pub fn selecting_nodes<Ctrl, Ctxt>(self, ctxt: &ParamsCtxt<Ctrl, Ctxt>) -> GenApiResult<Vec<Node>>
    where
        Ctxt: GenApiCtxt,
    {
        let store = ctxt.node_store();
        Ok(self
            .0
            .expect_iselector_kind(store)?
            .selecting_nodes(store)?
            .iter()
            .copied()
            .map(Node)
            .collect())
    }
}

impl Node {
    /// Narrows this node down to an [`IntegerNode`] if it implements `IInteger`.
    pub fn as_integer<Ctrl, Ctxt>(self, ctxt: &ParamsCtxt<Ctrl, Ctxt>) -> Option<IntegerNode>
    where
        Ctxt: GenApiCtxt,
    {
        self.0
            .as_iinteger_kind(ctxt.node_store())
            .map(|_| IntegerNode(self.0))
    }

    /// Narrows this node down to a [`FloatNode`] if it implements `IFloat`.
    pub fn as_float<Ctrl, Ctxt>(self, ctxt: &ParamsCtxt<Ctrl, Ctxt>) -> Option<FloatNode>
    where
        Ctxt: GenApiCtxt,
    {
        self.0
            .as_ifloat_kind(ctxt.node_store())
            .map(|_| FloatNode(self.0))
    }

    /// Narrows this node down to a [`StringNode`] if it implements `IString`.
    pub fn as_string<Ctrl, Ctxt>(self, ctxt: &ParamsCtxt<Ctrl, Ctxt>) -> Option<StringNode>
    where
        Ctxt: GenApiCtxt,
    {
        self.0
            .as_istring_kind(ctxt.node_store())
            .map(|_| StringNode(self.0))
    }

    /// Narrows this node down to a [`BooleanNode`] if it implements `IBoolean`.
    pub fn as_boolean<Ctrl, Ctxt>(self, ctxt: &ParamsCtxt<Ctrl, Ctxt>) -> Option<BooleanNode>
    where
        Ctxt: GenApiCtxt,
    {
        self.0
            .as_iboolean_kind(ctxt.node_store())
            .map(|_| BooleanNode(self.0))
    }

    /// Narrows this node down to a [`CommandNode`] if it implements `ICommand`.
    pub fn as_command<Ctrl, Ctxt>(self, ctxt: &ParamsCtxt<Ctrl, Ctxt>) -> Option<CommandNode>
    where
        Ctxt: GenApiCtxt,
    {
        self.0
            .as_icommand_kind(ctxt.node_store())
            .map(|_| CommandNode(self.0))
    }

    /// Narrows this node down to a [`RegisterNode`] if it implements `IRegister`.
    pub fn as_register<Ctrl, Ctxt>(self, ctxt: &ParamsCtxt<Ctrl, Ctxt>) -> Option<RegisterNode>
    where
        Ctxt: GenApiCtxt,
    {
        self.0
            .as_iregister_kind(ctxt.node_store())
            .map(|_| RegisterNode(self.0))
    }

    /// Narrows this node down to a [`PortNode`] if it implements `IPort`.
    pub fn as_port<Ctrl, Ctxt>(self, ctxt: &ParamsCtxt<Ctrl, Ctxt>) -> Option<PortNode>
    where
        Ctxt: GenApiCtxt,
    {
        self.0
            .as_iport_kind(ctxt.node_store())
            .map(|_| PortNode(self.0))
    }

    /// Narrows this node down to a [`CategoryNode`] if it implements `ICategory`.
    pub fn as_category<Ctrl, Ctxt>(self, ctxt: &ParamsCtxt<Ctrl, Ctxt>) -> Option<CategoryNode>
    where
        Ctxt: GenApiCtxt,
    {
        self.0
            .as_icategory_kind(ctxt.node_store())
            .map(|_| CategoryNode(self.0))
    }

    /// Narrows this node down to an [`EnumerationNode`] if it implements `IEnumeration`.
    pub fn as_enumeration<Ctrl, Ctxt>(
        self,
        ctxt: &ParamsCtxt<Ctrl, Ctxt>,
    ) -> Option<EnumerationNode>
    where
        Ctxt: GenApiCtxt,
    {
        self.0
            .as_ienumeration_kind(ctxt.node_store())
            .map(|_| EnumerationNode(self.0))
    }

    /// Returns the name of the underlying node.
    pub fn name<Ctrl, Ctxt>(self, ctxt: &ParamsCtxt<Ctrl, Ctxt>) -> String
    where
        Ctxt: GenApiCtxt,
    {
        self.0.name(ctxt.node_store()).to_string()
    }
}
