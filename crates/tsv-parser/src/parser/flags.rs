//! Node and modifier flag sets.
//!
//! Bit values follow the TypeScript compiler so flags can be compared with
//! dumps produced by `tsc`.

use bitflags::bitflags;

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u32 {
        const LET = 1;
        const CONST = 1 << 1;
        const USING = 1 << 2;
        const AWAIT_USING = Self::CONST.bits() | Self::USING.bits();
        const NESTED_NAMESPACE = 1 << 3;
        const SYNTHESIZED = 1 << 4;
        const NAMESPACE = 1 << 5;
        const OPTIONAL_CHAIN = 1 << 6;
        const EXPORT_CONTEXT = 1 << 7;
        const CONTAINS_THIS = 1 << 8;
        const HAS_IMPLICIT_RETURN = 1 << 9;
        const HAS_EXPLICIT_RETURN = 1 << 10;
        const GLOBAL_AUGMENTATION = 1 << 11;
        const HAS_ASYNC_FUNCTIONS = 1 << 12;
        const DISALLOW_IN_CONTEXT = 1 << 13;
        const YIELD_CONTEXT = 1 << 14;
        const DECORATOR_CONTEXT = 1 << 15;
        const AWAIT_CONTEXT = 1 << 16;
        const DISALLOW_CONDITIONAL_TYPES_CONTEXT = 1 << 17;
        /// Set by the parser on the node where a syntax error was reported.
        const THIS_NODE_HAS_ERROR = 1 << 18;
        const JAVASCRIPT_FILE = 1 << 19;
        /// Derived by aggregation; only meaningful once `HAS_AGGREGATED_CHILD_DATA` is set.
        const THIS_NODE_OR_ANY_SUB_NODES_HAS_ERROR = 1 << 20;
        const HAS_AGGREGATED_CHILD_DATA = 1 << 21;
        const POSSIBLY_CONTAINS_DYNAMIC_IMPORT = 1 << 22;
        const POSSIBLY_CONTAINS_IMPORT_META = 1 << 23;
        const JSDOC = 1 << 24;
        const AMBIENT = 1 << 25;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ModifierFlags: u32 {
        const PUBLIC = 1;
        const PRIVATE = 1 << 1;
        const PROTECTED = 1 << 2;
        const READONLY = 1 << 3;
        const OVERRIDE = 1 << 4;
        const EXPORT = 1 << 5;
        const ABSTRACT = 1 << 6;
        const AMBIENT = 1 << 7;
        const STATIC = 1 << 8;
        const ACCESSOR = 1 << 9;
        const ASYNC = 1 << 10;
        const DEFAULT = 1 << 11;
        const CONST = 1 << 12;

        const ACCESSIBILITY_MODIFIER = Self::PUBLIC.bits() | Self::PRIVATE.bits() | Self::PROTECTED.bits();
    }
}
