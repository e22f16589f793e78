//! Single-level child traversal.
//!
//! `walk_children` is the one table that knows, for every node payload, which
//! children exist and in what order they appear in source text. The public
//! entry points are thin adapters over it:
//!
//! - [`for_each_child`]: per-node callback, stops at the first `Some`
//! - [`for_each_child_with_lists`]: same, but whole lists go to a list callback
//! - [`for_each_child_optimized`]: visits everything, no early exit
//!
//! None of them recurse. Deep walks are built by callers re-entering from
//! their callback.

use super::base::{NodeIndex, NodeList};
use super::node::{Node, NodeArena, NodeData};
use tsv_scanner::SyntaxKind;

/// One child slot of a node: a single node or a whole list.
#[derive(Clone, Copy, Debug)]
pub enum Child<'a> {
    Node(NodeIndex),
    List(&'a NodeList),
}

trait Slot<'a> {
    fn child(self) -> Option<Child<'a>>;
}

impl<'a> Slot<'a> for NodeIndex {
    #[inline]
    fn child(self) -> Option<Child<'a>> {
        if self.is_some() {
            Some(Child::Node(self))
        } else {
            None
        }
    }
}

impl<'a> Slot<'a> for &'a NodeList {
    #[inline]
    fn child(self) -> Option<Child<'a>> {
        Some(Child::List(self))
    }
}

impl<'a> Slot<'a> for &'a Option<NodeList> {
    #[inline]
    fn child(self) -> Option<Child<'a>> {
        self.as_ref().map(Child::List)
    }
}

/// Visit each present slot in order, returning the first `Some` from `$visit`.
macro_rules! children {
    ($visit:ident; $($slot:expr),* $(,)?) => {{
        $(
            if let Some(child) = Slot::child($slot) {
                if let Some(result) = $visit(child) {
                    return Some(result);
                }
            }
        )*
        None
    }};
}

/// Enumerate the child slots of `node` in source order.
///
/// Absent single children (NONE) and absent optional lists are skipped.
/// A present list is always reported, even when empty.
pub fn walk_children<'a, R>(
    node: &'a Node,
    mut visit: impl FnMut(Child<'a>) -> Option<R>,
) -> Option<R> {
    match &node.data {
        NodeData::Token | NodeData::Identifier(_) | NodeData::Literal(_) => None,

        NodeData::QualifiedName(d) => children!(visit; d.left, d.right),
        NodeData::TypeParameter(d) => {
            children!(visit; &d.modifiers, d.name, d.constraint, d.default, d.expression)
        }
        NodeData::Parameter(d) => children!(visit;
            &d.modifiers,
            d.dot_dot_dot_token,
            d.name,
            d.question_token,
            d.type_annotation,
            d.initializer,
        ),

        NodeData::PropertySignature(d) => {
            children!(visit; &d.modifiers, d.name, d.question_token, d.type_annotation)
        }
        NodeData::PropertyDeclaration(d) => children!(visit;
            &d.modifiers,
            d.name,
            d.question_token,
            d.exclamation_token,
            d.type_annotation,
            d.initializer,
        ),
        NodeData::Function(d) => children!(visit;
            &d.modifiers,
            d.asterisk_token,
            d.name,
            d.question_token,
            &d.type_parameters,
            &d.parameters,
            d.type_annotation,
            d.equals_greater_than_token,
            d.body,
        ),
        NodeData::Signature(d) => children!(visit;
            &d.modifiers,
            &d.type_parameters,
            &d.parameters,
            d.type_annotation,
        ),
        NodeData::ClassStaticBlock(d) => children!(visit; &d.modifiers, d.body),

        NodeData::TypeReference(d) => children!(visit; d.type_name, &d.type_arguments),
        NodeData::TypePredicate(d) => {
            children!(visit; d.asserts_modifier, d.parameter_name, d.type_node)
        }
        NodeData::TypeQuery(d) => children!(visit; d.expr_name, &d.type_arguments),
        NodeData::TypeLiteral(d) => children!(visit; &d.members),
        NodeData::TupleType(d) => children!(visit; &d.elements),
        NodeData::UnionOrIntersection(d) => children!(visit; &d.types),
        NodeData::ConditionalType(d) => children!(visit;
            d.check_type,
            d.extends_type,
            d.true_type,
            d.false_type,
        ),
        NodeData::InferType(d) => children!(visit; d.type_parameter),
        NodeData::WrappedType(d) => children!(visit; d.type_node),
        NodeData::TypeOperator(d) => children!(visit; d.type_node),
        NodeData::IndexedAccessType(d) => children!(visit; d.object_type, d.index_type),
        NodeData::MappedType(d) => children!(visit;
            d.readonly_token,
            d.type_parameter,
            d.name_type,
            d.question_token,
            d.type_node,
            &d.members,
        ),
        NodeData::LiteralType(d) => children!(visit; d.literal),
        NodeData::NamedTupleMember(d) => children!(visit;
            d.dot_dot_dot_token,
            d.name,
            d.question_token,
            d.type_node,
        ),

        NodeData::BindingPattern(d) => children!(visit; &d.elements),
        NodeData::BindingElement(d) => children!(visit;
            d.dot_dot_dot_token,
            d.property_name,
            d.name,
            d.initializer,
        ),

        NodeData::Wrapped(d) => children!(visit; d.expression),
        NodeData::ArrayLiteral(d) => children!(visit; &d.elements),
        NodeData::ObjectLiteral(d) => children!(visit; &d.properties),
        NodeData::PropertyAssignment(d) => {
            children!(visit; d.name, d.question_token, d.initializer)
        }
        NodeData::ShorthandPropertyAssignment(d) => children!(visit;
            d.name,
            d.question_token,
            d.equals_token,
            d.object_assignment_initializer,
        ),
        NodeData::AccessExpr(d) => {
            children!(visit; d.expression, d.question_dot_token, d.name_or_argument)
        }
        NodeData::CallExpr(d) => children!(visit;
            d.expression,
            d.question_dot_token,
            &d.type_arguments,
            &d.arguments,
        ),
        NodeData::TaggedTemplate(d) => children!(visit; d.tag, &d.type_arguments, d.template),
        NodeData::TypeAssertion(d) => children!(visit; d.type_node, d.expression),
        NodeData::AsExpr(d) => children!(visit; d.expression, d.type_node),
        NodeData::UnaryExpr(d) => children!(visit; d.operand),
        NodeData::BinaryExpr(d) => children!(visit; d.left, d.operator_token, d.right),
        NodeData::ConditionalExpr(d) => children!(visit;
            d.condition,
            d.question_token,
            d.when_true,
            d.colon_token,
            d.when_false,
        ),
        NodeData::Yield(d) => children!(visit; d.asterisk_token, d.expression),
        NodeData::Template(d) => children!(visit; d.head, &d.template_spans),
        NodeData::TemplateSpan(d) => children!(visit; d.expression, d.literal),
        NodeData::MetaProperty(d) => children!(visit; d.name),

        NodeData::Block(d) => children!(visit; &d.statements),
        NodeData::VariableStatement(d) => children!(visit; &d.modifiers, d.declaration_list),
        NodeData::VariableDeclarationList(d) => children!(visit; &d.declarations),
        NodeData::VariableDeclaration(d) => children!(visit;
            d.name,
            d.exclamation_token,
            d.type_annotation,
            d.initializer,
        ),
        NodeData::If(d) => children!(visit; d.expression, d.then_statement, d.else_statement),
        NodeData::Loop(d) => match node.kind {
            SyntaxKind::DoStatement => children!(visit; d.statement, d.condition),
            SyntaxKind::WhileStatement => children!(visit; d.condition, d.statement),
            _ => children!(visit; d.initializer, d.condition, d.incrementor, d.statement),
        },
        NodeData::ForInOf(d) => children!(visit;
            d.await_modifier,
            d.initializer,
            d.expression,
            d.statement,
        ),
        NodeData::Jump(d) => children!(visit; d.label),
        NodeData::Switch(d) => children!(visit; d.expression, d.case_block),
        NodeData::CaseBlock(d) => children!(visit; &d.clauses),
        NodeData::CaseClause(d) => children!(visit; d.expression, &d.statements),
        NodeData::Labeled(d) => children!(visit; d.label, d.statement),
        NodeData::Try(d) => children!(visit; d.try_block, d.catch_clause, d.finally_block),
        NodeData::CatchClause(d) => children!(visit; d.variable_declaration, d.block),

        NodeData::ClassLike(d) => children!(visit;
            &d.modifiers,
            d.name,
            &d.type_parameters,
            &d.heritage_clauses,
            &d.members,
        ),
        NodeData::HeritageClause(d) => children!(visit; &d.types),
        NodeData::ExprWithTypeArgs(d) => children!(visit; d.expression, &d.type_arguments),
        NodeData::TypeAlias(d) => children!(visit;
            &d.modifiers,
            d.name,
            &d.type_parameters,
            d.type_node,
        ),
        NodeData::Enum(d) => children!(visit; &d.modifiers, d.name, &d.members),
        NodeData::EnumMember(d) => children!(visit; d.name, d.initializer),
        NodeData::Module(d) => children!(visit; &d.modifiers, d.name, d.body),
        NodeData::ImportEquals(d) => children!(visit; &d.modifiers, d.name, d.module_reference),
        NodeData::ImportDecl(d) => {
            children!(visit; &d.modifiers, d.import_clause, d.module_specifier)
        }
        NodeData::ImportClause(d) => children!(visit; d.name, d.named_bindings),
        NodeData::NamespaceBinding(d) => children!(visit; d.name),
        NodeData::NamedImportsOrExports(d) => children!(visit; &d.elements),
        NodeData::Specifier(d) => children!(visit; d.property_name, d.name),
        NodeData::ExportDecl(d) => {
            children!(visit; &d.modifiers, d.export_clause, d.module_specifier)
        }
        NodeData::ExportAssignment(d) => children!(visit; &d.modifiers, d.expression),
        NodeData::MissingDeclaration(d) => children!(visit; &d.modifiers),

        NodeData::JsxElement(d) => children!(visit; d.opening, &d.children, d.closing),
        NodeData::JsxOpening(d) => {
            children!(visit; d.tag_name, &d.type_arguments, d.attributes)
        }
        NodeData::JsxClosing(d) => children!(visit; d.tag_name),
        NodeData::JsxAttributes(d) => children!(visit; &d.properties),
        NodeData::JsxAttribute(d) => children!(visit; d.name, d.initializer),
        NodeData::JsxExpression(d) => children!(visit; d.dot_dot_dot_token, d.expression),
        NodeData::JsxNamespacedName(d) => children!(visit; d.namespace, d.name),

        NodeData::SourceFile(d) => children!(visit; &d.statements, d.end_of_file_token),
    }
}

#[inline]
fn visit_list<R>(list: &NodeList, cb_node: &mut impl FnMut(NodeIndex) -> Option<R>) -> Option<R> {
    list.nodes
        .iter()
        .copied()
        .filter(|child| child.is_some())
        .find_map(cb_node)
}

/// Invoke `cb_node` on each immediate child of `node` in source order,
/// returning the first `Some` it produces.
///
/// Returns `None` without calling anything if `node` is NONE or not in
/// the arena.
pub fn for_each_child<R>(
    arena: &NodeArena,
    node: NodeIndex,
    mut cb_node: impl FnMut(NodeIndex) -> Option<R>,
) -> Option<R> {
    let node = arena.get(node)?;
    walk_children(node, |child| match child {
        Child::Node(index) => cb_node(index),
        Child::List(list) => visit_list(list, &mut cb_node),
    })
}

/// Like [`for_each_child`], but each child list is handed to `cb_nodes` as a
/// whole instead of being flattened into `cb_node` calls.
pub fn for_each_child_with_lists<R>(
    arena: &NodeArena,
    node: NodeIndex,
    mut cb_node: impl FnMut(NodeIndex) -> Option<R>,
    mut cb_nodes: impl FnMut(&NodeList) -> Option<R>,
) -> Option<R> {
    let node = arena.get(node)?;
    walk_children(node, |child| match child {
        Child::Node(index) => cb_node(index),
        Child::List(list) => cb_nodes(list),
    })
}

/// Visit every immediate child of `node` in source order.
///
/// Visits exactly the children [`for_each_child`] would, in the same order.
pub fn for_each_child_optimized(
    arena: &NodeArena,
    node: NodeIndex,
    mut visitor: impl FnMut(NodeIndex),
) {
    if let Some(node) = arena.get(node) {
        for_each_child_of_node(node, &mut visitor);
    }
}

/// Visit every immediate child of a node that is not (yet) in an arena.
pub(crate) fn for_each_child_of_node(node: &Node, visitor: &mut impl FnMut(NodeIndex)) {
    walk_children(node, |child| {
        match child {
            Child::Node(index) => visitor(index),
            Child::List(list) => list
                .nodes
                .iter()
                .copied()
                .filter(|child| child.is_some())
                .for_each(&mut *visitor),
        }
        None::<()>
    });
}
