//! Node representation.
//!
//! Every node is a `Node` header (kind, span, flags, parent) plus a
//! `NodeData` payload. Kinds that share a child layout share a payload
//! variant; `Node::kind` tells them apart. Children are referenced by
//! `NodeIndex` into the owning [`NodeArena`].

use super::base::{NodeIndex, NodeList, TextRange};
use super::flags::NodeFlags;
use std::cell::Cell;
use tsv_scanner::SyntaxKind;

/// Arena that owns every node of one tree.
///
/// Nodes are appended bottom-up, children before parents; see `node_arena.rs`.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    pub(crate) nodes: Vec<Node>,
}

#[derive(Clone, Debug)]
pub struct Node {
    pub kind: SyntaxKind,
    /// Start offset, including leading trivia. `None` for synthesized nodes.
    pub pos: Option<u32>,
    pub end: Option<u32>,
    /// Mutated in place by single-writer passes (error aggregation).
    pub flags: Cell<NodeFlags>,
    /// Enclosing node. Never followed by traversal.
    pub parent: NodeIndex,
    pub data: NodeData,
}

impl Node {
    pub fn new(kind: SyntaxKind, pos: Option<u32>, end: Option<u32>, data: NodeData) -> Node {
        Node {
            kind,
            pos,
            end,
            flags: Cell::new(NodeFlags::empty()),
            parent: NodeIndex::NONE,
            data,
        }
    }

    #[inline]
    pub fn flags(&self) -> NodeFlags {
        self.flags.get()
    }

    #[inline]
    pub fn has_flags(&self, flags: NodeFlags) -> bool {
        self.flags.get().intersects(flags)
    }

    #[inline]
    pub fn add_flags(&self, flags: NodeFlags) {
        self.flags.set(self.flags.get() | flags);
    }
}

impl TextRange for Node {
    fn pos(&self) -> Option<u32> {
        self.pos
    }

    fn end(&self) -> Option<u32> {
        self.end
    }

    fn set_pos(&mut self, pos: Option<u32>) {
        self.pos = pos;
    }

    fn set_end(&mut self, end: Option<u32>) {
        self.end = end;
    }
}

/// Node payload, one variant per child layout.
#[derive(Clone, Debug)]
pub enum NodeData {
    /// Tokens, keywords and other leaf nodes without children
    /// (`EndOfFileToken`, `OmittedExpression`, `EmptyStatement`, `ThisType`...).
    Token,
    Identifier(IdentifierData),
    Literal(LiteralData),

    // Names and signature elements
    QualifiedName(QualifiedNameData),
    TypeParameter(TypeParameterData),
    Parameter(ParameterData),

    // Members
    PropertySignature(PropertySignatureData),
    PropertyDeclaration(PropertyDeclarationData),
    Function(FunctionData),
    Signature(SignatureData),
    ClassStaticBlock(ClassStaticBlockData),

    // Types
    TypeReference(TypeReferenceData),
    TypePredicate(TypePredicateData),
    TypeQuery(TypeQueryData),
    TypeLiteral(TypeLiteralData),
    TupleType(TupleTypeData),
    UnionOrIntersection(UnionOrIntersectionData),
    ConditionalType(ConditionalTypeData),
    InferType(InferTypeData),
    WrappedType(WrappedTypeData),
    TypeOperator(TypeOperatorData),
    IndexedAccessType(IndexedAccessTypeData),
    MappedType(MappedTypeData),
    LiteralType(LiteralTypeData),
    NamedTupleMember(NamedTupleMemberData),

    // Binding patterns
    BindingPattern(BindingPatternData),
    BindingElement(BindingElementData),

    // Expressions
    /// Single-expression wrappers: computed property names, decorators,
    /// parenthesized/delete/typeof/void/await/non-null/spread expressions,
    /// expression/return/throw statements, external module references...
    Wrapped(WrappedExprData),
    ArrayLiteral(ArrayLiteralData),
    ObjectLiteral(ObjectLiteralData),
    PropertyAssignment(PropertyAssignmentData),
    ShorthandPropertyAssignment(ShorthandPropertyAssignmentData),
    AccessExpr(AccessExprData),
    CallExpr(CallExprData),
    TaggedTemplate(TaggedTemplateData),
    TypeAssertion(TypeAssertionData),
    AsExpr(AsExprData),
    UnaryExpr(UnaryExprData),
    BinaryExpr(BinaryExprData),
    ConditionalExpr(ConditionalExprData),
    Yield(YieldData),
    Template(TemplateData),
    TemplateSpan(TemplateSpanData),
    MetaProperty(MetaPropertyData),

    // Statements
    Block(BlockData),
    VariableStatement(VariableStatementData),
    VariableDeclarationList(VariableDeclarationListData),
    VariableDeclaration(VariableDeclarationData),
    If(IfStatementData),
    Loop(LoopData),
    ForInOf(ForInOfData),
    Jump(JumpData),
    Switch(SwitchData),
    CaseBlock(CaseBlockData),
    CaseClause(CaseClauseData),
    Labeled(LabeledData),
    Try(TryData),
    CatchClause(CatchClauseData),

    // Declarations
    ClassLike(ClassLikeData),
    HeritageClause(HeritageClauseData),
    ExprWithTypeArgs(ExprWithTypeArgsData),
    TypeAlias(TypeAliasData),
    Enum(EnumData),
    EnumMember(EnumMemberData),
    Module(ModuleData),
    ImportEquals(ImportEqualsData),
    ImportDecl(ImportDeclData),
    ImportClause(ImportClauseData),
    /// `import * as ns`, `export * as ns`, `export as namespace ns`
    NamespaceBinding(NamespaceBindingData),
    NamedImportsOrExports(NamedImportsOrExportsData),
    Specifier(SpecifierData),
    ExportDecl(ExportDeclData),
    ExportAssignment(ExportAssignmentData),
    MissingDeclaration(MissingDeclarationData),

    // JSX
    JsxElement(JsxElementData),
    JsxOpening(JsxOpeningData),
    JsxClosing(JsxClosingData),
    JsxAttributes(JsxAttributesData),
    JsxAttribute(JsxAttributeData),
    JsxExpression(JsxExpressionData),
    JsxNamespacedName(JsxNamespacedNameData),

    SourceFile(SourceFileData),
}

// =============================================================================
// Leaves and names
// =============================================================================

#[derive(Clone, Debug, Default)]
pub struct IdentifierData {
    pub escaped_text: String,
    /// Part of a dotted namespace path inside a JSDoc type.
    pub is_in_jsdoc_namespace: bool,
}

#[derive(Clone, Debug, Default)]
pub struct LiteralData {
    pub text: String,
}

#[derive(Clone, Debug)]
pub struct QualifiedNameData {
    pub left: NodeIndex,
    pub right: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct TypeParameterData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub constraint: NodeIndex,
    pub default: NodeIndex,
    pub expression: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ParameterData {
    pub modifiers: Option<NodeList>,
    pub dot_dot_dot_token: NodeIndex,
    pub name: NodeIndex,
    pub question_token: NodeIndex,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

// =============================================================================
// Members
// =============================================================================

#[derive(Clone, Debug)]
pub struct PropertySignatureData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub question_token: NodeIndex,
    pub type_annotation: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct PropertyDeclarationData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub question_token: NodeIndex,
    pub exclamation_token: NodeIndex,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

/// Methods, constructors, accessors, function expressions and declarations,
/// arrow functions.
#[derive(Clone, Debug)]
pub struct FunctionData {
    pub modifiers: Option<NodeList>,
    pub asterisk_token: NodeIndex,
    pub name: NodeIndex,
    pub question_token: NodeIndex,
    pub type_parameters: Option<NodeList>,
    pub parameters: NodeList,
    pub type_annotation: NodeIndex,
    /// `=>` (arrow functions only)
    pub equals_greater_than_token: NodeIndex,
    pub body: NodeIndex,
}

/// Call, construct and index signatures; function and constructor types.
#[derive(Clone, Debug)]
pub struct SignatureData {
    pub modifiers: Option<NodeList>,
    pub type_parameters: Option<NodeList>,
    pub parameters: NodeList,
    pub type_annotation: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ClassStaticBlockData {
    pub modifiers: Option<NodeList>,
    pub body: NodeIndex,
}

// =============================================================================
// Types
// =============================================================================

#[derive(Clone, Debug)]
pub struct TypeReferenceData {
    pub type_name: NodeIndex,
    pub type_arguments: Option<NodeList>,
}

#[derive(Clone, Debug)]
pub struct TypePredicateData {
    pub asserts_modifier: NodeIndex,
    pub parameter_name: NodeIndex,
    pub type_node: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct TypeQueryData {
    pub expr_name: NodeIndex,
    pub type_arguments: Option<NodeList>,
}

#[derive(Clone, Debug)]
pub struct TypeLiteralData {
    pub members: NodeList,
}

#[derive(Clone, Debug)]
pub struct TupleTypeData {
    pub elements: NodeList,
}

#[derive(Clone, Debug)]
pub struct UnionOrIntersectionData {
    pub types: NodeList,
}

#[derive(Clone, Debug)]
pub struct ConditionalTypeData {
    pub check_type: NodeIndex,
    pub extends_type: NodeIndex,
    pub true_type: NodeIndex,
    pub false_type: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct InferTypeData {
    pub type_parameter: NodeIndex,
}

/// Array, optional, rest and parenthesized types.
#[derive(Clone, Debug)]
pub struct WrappedTypeData {
    pub type_node: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct TypeOperatorData {
    /// `keyof`, `unique` or `readonly`
    pub operator: SyntaxKind,
    pub type_node: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct IndexedAccessTypeData {
    pub object_type: NodeIndex,
    pub index_type: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct MappedTypeData {
    pub readonly_token: NodeIndex,
    pub type_parameter: NodeIndex,
    pub name_type: NodeIndex,
    pub question_token: NodeIndex,
    pub type_node: NodeIndex,
    pub members: Option<NodeList>,
}

#[derive(Clone, Debug)]
pub struct LiteralTypeData {
    pub literal: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct NamedTupleMemberData {
    pub dot_dot_dot_token: NodeIndex,
    pub name: NodeIndex,
    pub question_token: NodeIndex,
    pub type_node: NodeIndex,
}

// =============================================================================
// Binding patterns
// =============================================================================

#[derive(Clone, Debug)]
pub struct BindingPatternData {
    pub elements: NodeList,
}

#[derive(Clone, Debug)]
pub struct BindingElementData {
    pub dot_dot_dot_token: NodeIndex,
    pub property_name: NodeIndex,
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

// =============================================================================
// Expressions
// =============================================================================

#[derive(Clone, Debug)]
pub struct WrappedExprData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ArrayLiteralData {
    pub elements: NodeList,
}

#[derive(Clone, Debug)]
pub struct ObjectLiteralData {
    pub properties: NodeList,
}

#[derive(Clone, Debug)]
pub struct PropertyAssignmentData {
    pub name: NodeIndex,
    pub question_token: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ShorthandPropertyAssignmentData {
    pub name: NodeIndex,
    pub question_token: NodeIndex,
    pub equals_token: NodeIndex,
    pub object_assignment_initializer: NodeIndex,
}

/// Property access (`a.b`, `a?.b`) or element access (`a[b]`).
#[derive(Clone, Debug)]
pub struct AccessExprData {
    pub expression: NodeIndex,
    pub question_dot_token: NodeIndex,
    /// The property name, or the argument expression of an element access
    pub name_or_argument: NodeIndex,
}

/// Call or `new` expression. `arguments` is `None` for `new C` without parens.
#[derive(Clone, Debug)]
pub struct CallExprData {
    pub expression: NodeIndex,
    pub question_dot_token: NodeIndex,
    pub type_arguments: Option<NodeList>,
    pub arguments: Option<NodeList>,
}

#[derive(Clone, Debug)]
pub struct TaggedTemplateData {
    pub tag: NodeIndex,
    pub type_arguments: Option<NodeList>,
    pub template: NodeIndex,
}

/// `<T>expr`
#[derive(Clone, Debug)]
pub struct TypeAssertionData {
    pub type_node: NodeIndex,
    pub expression: NodeIndex,
}

/// `expr as T` and `expr satisfies T`
#[derive(Clone, Debug)]
pub struct AsExprData {
    pub expression: NodeIndex,
    pub type_node: NodeIndex,
}

/// Prefix or postfix unary expression.
#[derive(Clone, Debug)]
pub struct UnaryExprData {
    pub operator: SyntaxKind,
    pub operand: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct BinaryExprData {
    pub left: NodeIndex,
    pub operator_token: NodeIndex,
    pub right: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ConditionalExprData {
    pub condition: NodeIndex,
    pub question_token: NodeIndex,
    pub when_true: NodeIndex,
    pub colon_token: NodeIndex,
    pub when_false: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct YieldData {
    pub asterisk_token: NodeIndex,
    pub expression: NodeIndex,
}

/// Template expression or template literal type: a head and its spans.
#[derive(Clone, Debug)]
pub struct TemplateData {
    pub head: NodeIndex,
    pub template_spans: NodeList,
}

/// Template span or template literal type span.
#[derive(Clone, Debug)]
pub struct TemplateSpanData {
    /// An expression, or a type for template literal type spans
    pub expression: NodeIndex,
    pub literal: NodeIndex,
}

/// `new.target` / `import.meta`
#[derive(Clone, Debug)]
pub struct MetaPropertyData {
    pub keyword_token: SyntaxKind,
    pub name: NodeIndex,
}

// =============================================================================
// Statements
// =============================================================================

/// `Block` or `ModuleBlock`
#[derive(Clone, Debug)]
pub struct BlockData {
    pub statements: NodeList,
}

#[derive(Clone, Debug)]
pub struct VariableStatementData {
    pub modifiers: Option<NodeList>,
    pub declaration_list: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct VariableDeclarationListData {
    pub declarations: NodeList,
}

#[derive(Clone, Debug)]
pub struct VariableDeclarationData {
    pub name: NodeIndex,
    pub exclamation_token: NodeIndex,
    pub type_annotation: NodeIndex,
    pub initializer: NodeIndex,
}

/// `if` statements; also used by `with` (no else branch).
#[derive(Clone, Debug)]
pub struct IfStatementData {
    pub expression: NodeIndex,
    pub then_statement: NodeIndex,
    pub else_statement: NodeIndex,
}

/// `for`, `while` and `do` loops. `while` and `do` only use `condition`
/// and `statement`.
#[derive(Clone, Debug)]
pub struct LoopData {
    pub initializer: NodeIndex,
    pub condition: NodeIndex,
    pub incrementor: NodeIndex,
    pub statement: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ForInOfData {
    /// `await` in `for await (...)`
    pub await_modifier: NodeIndex,
    pub initializer: NodeIndex,
    pub expression: NodeIndex,
    pub statement: NodeIndex,
}

/// `break` / `continue`
#[derive(Clone, Debug)]
pub struct JumpData {
    pub label: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct SwitchData {
    pub expression: NodeIndex,
    pub case_block: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct CaseBlockData {
    pub clauses: NodeList,
}

/// `case` and `default` clauses. `expression` is NONE for `default`.
#[derive(Clone, Debug)]
pub struct CaseClauseData {
    pub expression: NodeIndex,
    pub statements: NodeList,
}

#[derive(Clone, Debug)]
pub struct LabeledData {
    pub label: NodeIndex,
    pub statement: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct TryData {
    pub try_block: NodeIndex,
    pub catch_clause: NodeIndex,
    pub finally_block: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct CatchClauseData {
    pub variable_declaration: NodeIndex,
    pub block: NodeIndex,
}

// =============================================================================
// Declarations
// =============================================================================

/// Class declarations and expressions, interface declarations.
#[derive(Clone, Debug)]
pub struct ClassLikeData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub type_parameters: Option<NodeList>,
    pub heritage_clauses: Option<NodeList>,
    pub members: NodeList,
}

#[derive(Clone, Debug)]
pub struct HeritageClauseData {
    /// `extends` or `implements`
    pub token: SyntaxKind,
    pub types: NodeList,
}

#[derive(Clone, Debug)]
pub struct ExprWithTypeArgsData {
    pub expression: NodeIndex,
    pub type_arguments: Option<NodeList>,
}

#[derive(Clone, Debug)]
pub struct TypeAliasData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub type_parameters: Option<NodeList>,
    pub type_node: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct EnumData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    pub members: NodeList,
}

#[derive(Clone, Debug)]
pub struct EnumMemberData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ModuleData {
    pub modifiers: Option<NodeList>,
    pub name: NodeIndex,
    /// A `ModuleBlock`, or a nested `ModuleDeclaration` for `namespace a.b`
    pub body: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ImportEqualsData {
    pub modifiers: Option<NodeList>,
    pub is_type_only: bool,
    pub name: NodeIndex,
    /// An entity name or an `ExternalModuleReference`
    pub module_reference: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ImportDeclData {
    pub modifiers: Option<NodeList>,
    pub import_clause: NodeIndex,
    pub module_specifier: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ImportClauseData {
    pub is_type_only: bool,
    pub name: NodeIndex,
    pub named_bindings: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct NamespaceBindingData {
    pub name: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct NamedImportsOrExportsData {
    pub elements: NodeList,
}

/// Import or export specifier: `a`, `a as b`, `type a`.
#[derive(Clone, Debug)]
pub struct SpecifierData {
    pub is_type_only: bool,
    pub property_name: NodeIndex,
    pub name: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ExportDeclData {
    pub modifiers: Option<NodeList>,
    pub is_type_only: bool,
    pub export_clause: NodeIndex,
    pub module_specifier: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ExportAssignmentData {
    pub modifiers: Option<NodeList>,
    /// `export = x` rather than `export default x`
    pub is_export_equals: bool,
    pub expression: NodeIndex,
}

/// Placeholder the parser leaves where a declaration was expected.
#[derive(Clone, Debug)]
pub struct MissingDeclarationData {
    pub modifiers: Option<NodeList>,
}

// =============================================================================
// JSX
// =============================================================================

/// `JsxElement` or `JsxFragment`
#[derive(Clone, Debug)]
pub struct JsxElementData {
    pub opening: NodeIndex,
    pub children: NodeList,
    pub closing: NodeIndex,
}

/// `JsxOpeningElement` or `JsxSelfClosingElement`
#[derive(Clone, Debug)]
pub struct JsxOpeningData {
    pub tag_name: NodeIndex,
    pub type_arguments: Option<NodeList>,
    pub attributes: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct JsxClosingData {
    pub tag_name: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct JsxAttributesData {
    pub properties: NodeList,
}

#[derive(Clone, Debug)]
pub struct JsxAttributeData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct JsxExpressionData {
    pub dot_dot_dot_token: NodeIndex,
    pub expression: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct JsxNamespacedNameData {
    pub namespace: NodeIndex,
    pub name: NodeIndex,
}

// =============================================================================
// Source file
// =============================================================================

/// The node that proved a file is an ES module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExternalModuleIndicator {
    /// A top-level import/export statement
    Statement(NodeIndex),
    /// An `import.meta` meta-property found anywhere in the file
    ImportMeta(NodeIndex),
}

impl ExternalModuleIndicator {
    pub const fn node(self) -> NodeIndex {
        match self {
            ExternalModuleIndicator::Statement(node) | ExternalModuleIndicator::ImportMeta(node) => {
                node
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct SourceFileData {
    pub file_name: String,
    pub statements: NodeList,
    pub end_of_file_token: NodeIndex,
    /// Set once by `set_external_module_indicator` after the tree is complete.
    pub external_module_indicator: Option<ExternalModuleIndicator>,
}
