//! Structural capability traits.
//!
//! A node payload may satisfy several of these at once. Dispatch over the
//! tree is always by `NodeData`; these traits let utilities query a
//! capability without matching every payload that has it.

use super::base::{NodeIndex, NodeList};
use super::node::*;

pub trait HasName {
    /// The declared name, or NONE for anonymous declarations.
    fn name(&self) -> NodeIndex;
}

pub trait HasModifierLike {
    /// Modifier tokens and decorators in source order.
    fn modifiers(&self) -> Option<&NodeList>;
}

pub trait SignatureDeclaration {
    fn type_parameters(&self) -> Option<&NodeList>;
    fn parameters(&self) -> &NodeList;
    fn return_type(&self) -> NodeIndex;
}

pub trait FunctionLikeDeclaration: SignatureDeclaration + HasName {
    fn asterisk_token(&self) -> NodeIndex;
    fn question_token(&self) -> NodeIndex;
    fn body(&self) -> NodeIndex;
}

pub trait VariableLikeDeclaration: HasName {
    fn type_annotation(&self) -> NodeIndex;
    fn initializer(&self) -> NodeIndex;
}

pub trait BindingPattern {
    fn elements(&self) -> &NodeList;
}

pub trait BreakOrContinueStatement {
    fn label(&self) -> NodeIndex;
}

pub trait ImportOrExportSpecifier: HasName {
    fn property_name(&self) -> NodeIndex;
    fn is_type_only(&self) -> bool;
}

pub trait UnionOrIntersectionTypeNode {
    fn types(&self) -> &NodeList;
}

macro_rules! impl_has_name {
    ($($ty:ty),+ $(,)?) => {
        $(impl HasName for $ty {
            #[inline]
            fn name(&self) -> NodeIndex {
                self.name
            }
        })+
    };
}

macro_rules! impl_has_modifiers {
    ($($ty:ty),+ $(,)?) => {
        $(impl HasModifierLike for $ty {
            #[inline]
            fn modifiers(&self) -> Option<&NodeList> {
                self.modifiers.as_ref()
            }
        })+
    };
}

impl_has_name!(
    TypeParameterData,
    ParameterData,
    PropertySignatureData,
    PropertyDeclarationData,
    FunctionData,
    NamedTupleMemberData,
    BindingElementData,
    PropertyAssignmentData,
    ShorthandPropertyAssignmentData,
    MetaPropertyData,
    VariableDeclarationData,
    ClassLikeData,
    TypeAliasData,
    EnumData,
    EnumMemberData,
    ModuleData,
    ImportEqualsData,
    ImportClauseData,
    NamespaceBindingData,
    SpecifierData,
    JsxAttributeData,
    JsxNamespacedNameData,
);

impl_has_modifiers!(
    TypeParameterData,
    ParameterData,
    PropertySignatureData,
    PropertyDeclarationData,
    FunctionData,
    SignatureData,
    ClassStaticBlockData,
    VariableStatementData,
    ClassLikeData,
    TypeAliasData,
    EnumData,
    ModuleData,
    ImportEqualsData,
    ImportDeclData,
    ExportDeclData,
    ExportAssignmentData,
    MissingDeclarationData,
);

impl SignatureDeclaration for FunctionData {
    fn type_parameters(&self) -> Option<&NodeList> {
        self.type_parameters.as_ref()
    }

    fn parameters(&self) -> &NodeList {
        &self.parameters
    }

    fn return_type(&self) -> NodeIndex {
        self.type_annotation
    }
}

impl SignatureDeclaration for SignatureData {
    fn type_parameters(&self) -> Option<&NodeList> {
        self.type_parameters.as_ref()
    }

    fn parameters(&self) -> &NodeList {
        &self.parameters
    }

    fn return_type(&self) -> NodeIndex {
        self.type_annotation
    }
}

impl FunctionLikeDeclaration for FunctionData {
    fn asterisk_token(&self) -> NodeIndex {
        self.asterisk_token
    }

    fn question_token(&self) -> NodeIndex {
        self.question_token
    }

    fn body(&self) -> NodeIndex {
        self.body
    }
}

macro_rules! impl_variable_like {
    ($($ty:ty),+ $(,)?) => {
        $(impl VariableLikeDeclaration for $ty {
            fn type_annotation(&self) -> NodeIndex {
                self.type_annotation
            }

            fn initializer(&self) -> NodeIndex {
                self.initializer
            }
        })+
    };
}

impl_variable_like!(ParameterData, PropertyDeclarationData, VariableDeclarationData);

impl VariableLikeDeclaration for PropertySignatureData {
    fn type_annotation(&self) -> NodeIndex {
        self.type_annotation
    }

    fn initializer(&self) -> NodeIndex {
        NodeIndex::NONE
    }
}

impl VariableLikeDeclaration for BindingElementData {
    fn type_annotation(&self) -> NodeIndex {
        NodeIndex::NONE
    }

    fn initializer(&self) -> NodeIndex {
        self.initializer
    }
}

impl VariableLikeDeclaration for PropertyAssignmentData {
    fn type_annotation(&self) -> NodeIndex {
        NodeIndex::NONE
    }

    fn initializer(&self) -> NodeIndex {
        self.initializer
    }
}

impl VariableLikeDeclaration for EnumMemberData {
    fn type_annotation(&self) -> NodeIndex {
        NodeIndex::NONE
    }

    fn initializer(&self) -> NodeIndex {
        self.initializer
    }
}

impl BindingPattern for BindingPatternData {
    fn elements(&self) -> &NodeList {
        &self.elements
    }
}

impl BreakOrContinueStatement for JumpData {
    fn label(&self) -> NodeIndex {
        self.label
    }
}

impl ImportOrExportSpecifier for SpecifierData {
    fn property_name(&self) -> NodeIndex {
        self.property_name
    }

    fn is_type_only(&self) -> bool {
        self.is_type_only
    }
}

impl UnionOrIntersectionTypeNode for UnionOrIntersectionData {
    fn types(&self) -> &NodeList {
        &self.types
    }
}

impl NodeData {
    /// The declared name of this node, or NONE.
    pub fn name(&self) -> NodeIndex {
        self.as_has_name().map_or(NodeIndex::NONE, HasName::name)
    }

    /// The modifier sequence, if this node can carry one and does.
    pub fn modifiers(&self) -> Option<&NodeList> {
        self.as_has_modifiers().and_then(HasModifierLike::modifiers)
    }

    pub fn as_has_name(&self) -> Option<&dyn HasName> {
        match self {
            NodeData::TypeParameter(d) => Some(d),
            NodeData::Parameter(d) => Some(d),
            NodeData::PropertySignature(d) => Some(d),
            NodeData::PropertyDeclaration(d) => Some(d),
            NodeData::Function(d) => Some(d),
            NodeData::NamedTupleMember(d) => Some(d),
            NodeData::BindingElement(d) => Some(d),
            NodeData::PropertyAssignment(d) => Some(d),
            NodeData::ShorthandPropertyAssignment(d) => Some(d),
            NodeData::MetaProperty(d) => Some(d),
            NodeData::VariableDeclaration(d) => Some(d),
            NodeData::ClassLike(d) => Some(d),
            NodeData::TypeAlias(d) => Some(d),
            NodeData::Enum(d) => Some(d),
            NodeData::EnumMember(d) => Some(d),
            NodeData::Module(d) => Some(d),
            NodeData::ImportEquals(d) => Some(d),
            NodeData::ImportClause(d) => Some(d),
            NodeData::NamespaceBinding(d) => Some(d),
            NodeData::Specifier(d) => Some(d),
            NodeData::JsxAttribute(d) => Some(d),
            NodeData::JsxNamespacedName(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_has_modifiers(&self) -> Option<&dyn HasModifierLike> {
        match self {
            NodeData::TypeParameter(d) => Some(d),
            NodeData::Parameter(d) => Some(d),
            NodeData::PropertySignature(d) => Some(d),
            NodeData::PropertyDeclaration(d) => Some(d),
            NodeData::Function(d) => Some(d),
            NodeData::Signature(d) => Some(d),
            NodeData::ClassStaticBlock(d) => Some(d),
            NodeData::VariableStatement(d) => Some(d),
            NodeData::ClassLike(d) => Some(d),
            NodeData::TypeAlias(d) => Some(d),
            NodeData::Enum(d) => Some(d),
            NodeData::Module(d) => Some(d),
            NodeData::ImportEquals(d) => Some(d),
            NodeData::ImportDecl(d) => Some(d),
            NodeData::ExportDecl(d) => Some(d),
            NodeData::ExportAssignment(d) => Some(d),
            NodeData::MissingDeclaration(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_signature(&self) -> Option<&dyn SignatureDeclaration> {
        match self {
            NodeData::Function(d) => Some(d),
            NodeData::Signature(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_function_like(&self) -> Option<&FunctionData> {
        match self {
            NodeData::Function(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_variable_like(&self) -> Option<&dyn VariableLikeDeclaration> {
        match self {
            NodeData::Parameter(d) => Some(d),
            NodeData::PropertySignature(d) => Some(d),
            NodeData::PropertyDeclaration(d) => Some(d),
            NodeData::VariableDeclaration(d) => Some(d),
            NodeData::BindingElement(d) => Some(d),
            NodeData::PropertyAssignment(d) => Some(d),
            NodeData::EnumMember(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_binding_pattern(&self) -> Option<&dyn BindingPattern> {
        match self {
            NodeData::BindingPattern(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_break_or_continue(&self) -> Option<&dyn BreakOrContinueStatement> {
        match self {
            NodeData::Jump(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_specifier(&self) -> Option<&dyn ImportOrExportSpecifier> {
        match self {
            NodeData::Specifier(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_union_or_intersection(&self) -> Option<&dyn UnionOrIntersectionTypeNode> {
        match self {
            NodeData::UnionOrIntersection(d) => Some(d),
            _ => None,
        }
    }
}
