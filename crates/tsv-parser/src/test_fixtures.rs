//! Shared tree builders for parser crate tests.
//!
//! `TreeBuilder` hands out consecutive one-byte spans to leaves in creation
//! order and gives composite nodes the span covering their children. Building
//! children in source order therefore yields strictly increasing `pos`
//! values along every node's child sequence.

use crate::parser::*;
use tsv_scanner::SyntaxKind;

pub(crate) struct TreeBuilder {
    pub arena: NodeArena,
    cursor: u32,
}

impl TreeBuilder {
    pub fn new() -> Self {
        TreeBuilder {
            arena: NodeArena::new(),
            cursor: 0,
        }
    }

    fn advance(&mut self) -> (u32, u32) {
        let pos = self.cursor;
        self.cursor += 1;
        (pos, self.cursor)
    }

    pub fn tok(&mut self, kind: SyntaxKind) -> NodeIndex {
        let (pos, end) = self.advance();
        self.arena.add_token(kind, pos, end)
    }

    pub fn id(&mut self, text: &str) -> NodeIndex {
        let (pos, end) = self.advance();
        self.arena.add_identifier(text, pos, end)
    }

    pub fn lit(&mut self, kind: SyntaxKind, text: &str) -> NodeIndex {
        let (pos, end) = self.advance();
        self.arena.add_literal(kind, text, pos, end)
    }

    /// Add a composite node spanning its children (or a fresh one-byte span
    /// if it has none).
    pub fn node(&mut self, kind: SyntaxKind, data: NodeData) -> NodeIndex {
        let index = self.arena.add_node(kind, None, None, data);
        let mut span: Option<(u32, u32)> = None;
        for_each_child_optimized(&self.arena, index, |child| {
            if let Some(node) = self.arena.get(child) {
                let (pos, end) = (node.pos.unwrap_or(0), node.end.unwrap_or(0));
                span = Some(match span {
                    Some((p, e)) => (p.min(pos), e.max(end)),
                    None => (pos, end),
                });
            }
        });
        let (pos, end) = match span {
            Some(span) => span,
            None => self.advance(),
        };
        if let Some(node) = self.arena.get_mut(index) {
            set_text_range_pos_end(node, pos, end);
        }
        index
    }

    pub fn mods(&mut self, kinds: &[SyntaxKind]) -> Option<NodeList> {
        Some(kinds.iter().map(|&kind| self.tok(kind)).collect())
    }

    pub fn wrapped(&mut self, kind: SyntaxKind, expression: NodeIndex) -> NodeIndex {
        self.node(kind, NodeData::Wrapped(WrappedExprData { expression }))
    }

    pub fn type_ref(&mut self, name: &str) -> NodeIndex {
        let type_name = self.id(name);
        self.node(
            SyntaxKind::TypeReference,
            NodeData::TypeReference(TypeReferenceData {
                type_name,
                type_arguments: None,
            }),
        )
    }

    pub fn block(&mut self, kind: SyntaxKind, statements: Vec<NodeIndex>) -> NodeIndex {
        self.node(
            kind,
            NodeData::Block(BlockData {
                statements: statements.into(),
            }),
        )
    }

    pub fn expr_stmt(&mut self, expression: NodeIndex) -> NodeIndex {
        self.wrapped(SyntaxKind::ExpressionStatement, expression)
    }

    pub fn binary(&mut self, left: NodeIndex, op: SyntaxKind, right_text: &str) -> NodeIndex {
        let operator_token = self.tok(op);
        let right = self.id(right_text);
        self.node(
            SyntaxKind::BinaryExpression,
            NodeData::BinaryExpr(BinaryExprData {
                left,
                operator_token,
                right,
            }),
        )
    }

    pub fn type_parameter(&mut self, name: &str) -> NodeIndex {
        let name = self.id(name);
        self.node(
            SyntaxKind::TypeParameter,
            NodeData::TypeParameter(TypeParameterData {
                modifiers: None,
                name,
                constraint: NodeIndex::NONE,
                default: NodeIndex::NONE,
                expression: NodeIndex::NONE,
            }),
        )
    }

    pub fn parameter(&mut self, name: &str) -> NodeIndex {
        let name = self.id(name);
        self.node(
            SyntaxKind::Parameter,
            NodeData::Parameter(ParameterData {
                modifiers: None,
                dot_dot_dot_token: NodeIndex::NONE,
                name,
                question_token: NodeIndex::NONE,
                type_annotation: NodeIndex::NONE,
                initializer: NodeIndex::NONE,
            }),
        )
    }

    pub fn variable_statement(
        &mut self,
        modifiers: &[SyntaxKind],
        name: &str,
        initializer_text: &str,
    ) -> NodeIndex {
        let modifiers = if modifiers.is_empty() {
            None
        } else {
            self.mods(modifiers)
        };
        let name = self.id(name);
        let initializer = self.id(initializer_text);
        let decl = self.node(
            SyntaxKind::VariableDeclaration,
            NodeData::VariableDeclaration(VariableDeclarationData {
                name,
                exclamation_token: NodeIndex::NONE,
                type_annotation: NodeIndex::NONE,
                initializer,
            }),
        );
        let list = self.node(
            SyntaxKind::VariableDeclarationList,
            NodeData::VariableDeclarationList(VariableDeclarationListData {
                declarations: vec![decl].into(),
            }),
        );
        self.node(
            SyntaxKind::VariableStatement,
            NodeData::VariableStatement(VariableStatementData {
                modifiers,
                declaration_list: list,
            }),
        )
    }

    pub fn import_meta(&mut self) -> NodeIndex {
        let name = self.id("meta");
        self.node(
            SyntaxKind::MetaProperty,
            NodeData::MetaProperty(MetaPropertyData {
                keyword_token: SyntaxKind::ImportKeyword,
                name,
            }),
        )
    }

    pub fn source_file(&mut self, file_name: &str, statements: Vec<NodeIndex>) -> NodeIndex {
        let end_of_file_token = self.tok(SyntaxKind::EndOfFileToken);
        self.node(
            SyntaxKind::SourceFile,
            NodeData::SourceFile(SourceFileData {
                file_name: file_name.to_string(),
                statements: statements.into(),
                end_of_file_token,
                external_module_indicator: None,
            }),
        )
    }

    fn function(
        &mut self,
        kind: SyntaxKind,
        modifiers: &[SyntaxKind],
        with_asterisk: bool,
        name: Option<&str>,
        with_question: bool,
    ) -> NodeIndex {
        let modifiers = self.mods(modifiers);
        let asterisk_token = if with_asterisk {
            self.tok(SyntaxKind::AsteriskToken)
        } else {
            NodeIndex::NONE
        };
        let name = name.map_or(NodeIndex::NONE, |text| self.id(text));
        let question_token = if with_question {
            self.tok(SyntaxKind::QuestionToken)
        } else {
            NodeIndex::NONE
        };
        let type_parameters = Some(vec![self.type_parameter("T")].into());
        let parameters = vec![self.parameter("p")].into();
        let type_annotation = self.type_ref("R");
        let equals_greater_than_token = if kind == SyntaxKind::ArrowFunction {
            self.tok(SyntaxKind::EqualsGreaterThanToken)
        } else {
            NodeIndex::NONE
        };
        let body = if kind == SyntaxKind::MethodSignature {
            NodeIndex::NONE
        } else {
            self.block(SyntaxKind::Block, vec![])
        };
        self.node(
            kind,
            NodeData::Function(FunctionData {
                modifiers,
                asterisk_token,
                name,
                question_token,
                type_parameters,
                parameters,
                type_annotation,
                equals_greater_than_token,
                body,
            }),
        )
    }

    fn signature(&mut self, kind: SyntaxKind, modifiers: &[SyntaxKind]) -> NodeIndex {
        let modifiers = self.mods(modifiers);
        let type_parameters = Some(vec![self.type_parameter("T")].into());
        let parameters = vec![self.parameter("p")].into();
        let type_annotation = self.type_ref("R");
        self.node(
            kind,
            NodeData::Signature(SignatureData {
                modifiers,
                type_parameters,
                parameters,
                type_annotation,
            }),
        )
    }

    fn class_like(&mut self, kind: SyntaxKind, modifiers: &[SyntaxKind]) -> NodeIndex {
        let modifiers = self.mods(modifiers);
        let name = self.id("C");
        let type_parameters = Some(vec![self.type_parameter("T")].into());
        let base = self.id("Base");
        let type_arguments = Some(vec![self.type_ref("T")].into());
        let heritage_type = self.node(
            SyntaxKind::ExpressionWithTypeArguments,
            NodeData::ExprWithTypeArgs(ExprWithTypeArgsData {
                expression: base,
                type_arguments,
            }),
        );
        let heritage = self.node(
            SyntaxKind::HeritageClause,
            NodeData::HeritageClause(HeritageClauseData {
                token: SyntaxKind::ExtendsKeyword,
                types: vec![heritage_type].into(),
            }),
        );
        let member = self.tok(SyntaxKind::SemicolonClassElement);
        self.node(
            kind,
            NodeData::ClassLike(ClassLikeData {
                modifiers,
                name,
                type_parameters,
                heritage_clauses: Some(vec![heritage].into()),
                members: vec![member].into(),
            }),
        )
    }

    fn template(&mut self, kind: SyntaxKind, span_kind: SyntaxKind) -> NodeIndex {
        let head = self.lit(SyntaxKind::TemplateHead, "a");
        let expression = if span_kind == SyntaxKind::TemplateSpan {
            self.id("x")
        } else {
            self.type_ref("X")
        };
        let literal = self.lit(SyntaxKind::TemplateTail, "b");
        let span = self.node(
            span_kind,
            NodeData::TemplateSpan(TemplateSpanData {
                expression,
                literal,
            }),
        );
        self.node(
            kind,
            NodeData::Template(TemplateData {
                head,
                template_spans: vec![span].into(),
            }),
        )
    }

    fn unary(&mut self, kind: SyntaxKind, operator: SyntaxKind) -> NodeIndex {
        let operand = self.id("x");
        self.node(kind, NodeData::UnaryExpr(UnaryExprData { operator, operand }))
    }

    fn wrapped_type(&mut self, kind: SyntaxKind) -> NodeIndex {
        let type_node = self.type_ref("T");
        self.node(kind, NodeData::WrappedType(WrappedTypeData { type_node }))
    }

    fn union_or_intersection(&mut self, kind: SyntaxKind) -> NodeIndex {
        let a = self.type_ref("A");
        let b = self.type_ref("B");
        self.node(
            kind,
            NodeData::UnionOrIntersection(UnionOrIntersectionData {
                types: vec![a, b].into(),
            }),
        )
    }

    fn binding_element(&mut self) -> NodeIndex {
        let dot_dot_dot_token = self.tok(SyntaxKind::DotDotDotToken);
        let property_name = self.id("a");
        let name = self.id("b");
        let initializer = self.id("c");
        self.node(
            SyntaxKind::BindingElement,
            NodeData::BindingElement(BindingElementData {
                dot_dot_dot_token,
                property_name,
                name,
                initializer,
            }),
        )
    }

    fn loop_statement(&mut self, kind: SyntaxKind) -> NodeIndex {
        let data = match kind {
            SyntaxKind::DoStatement => {
                let statement = self.block(SyntaxKind::Block, vec![]);
                let condition = self.id("c");
                LoopData {
                    initializer: NodeIndex::NONE,
                    condition,
                    incrementor: NodeIndex::NONE,
                    statement,
                }
            }
            SyntaxKind::WhileStatement => {
                let condition = self.id("c");
                let statement = self.block(SyntaxKind::Block, vec![]);
                LoopData {
                    initializer: NodeIndex::NONE,
                    condition,
                    incrementor: NodeIndex::NONE,
                    statement,
                }
            }
            _ => {
                let initializer = self.id("i");
                let condition = self.id("c");
                let incrementor = self.id("n");
                let statement = self.block(SyntaxKind::Block, vec![]);
                LoopData {
                    initializer,
                    condition,
                    incrementor,
                    statement,
                }
            }
        };
        self.node(kind, NodeData::Loop(data))
    }

    fn for_in_of(&mut self, kind: SyntaxKind) -> NodeIndex {
        let await_modifier = if kind == SyntaxKind::ForOfStatement {
            self.tok(SyntaxKind::AwaitKeyword)
        } else {
            NodeIndex::NONE
        };
        let initializer = self.id("k");
        let expression = self.id("o");
        let statement = self.block(SyntaxKind::Block, vec![]);
        self.node(
            kind,
            NodeData::ForInOf(ForInOfData {
                await_modifier,
                initializer,
                expression,
                statement,
            }),
        )
    }

    fn specifier(&mut self, kind: SyntaxKind) -> NodeIndex {
        let property_name = self.id("a");
        let name = self.id("b");
        self.node(
            kind,
            NodeData::Specifier(SpecifierData {
                is_type_only: false,
                property_name,
                name,
            }),
        )
    }

    fn jsx_opening(&mut self, kind: SyntaxKind) -> NodeIndex {
        let tag_name = self.id("div");
        let type_arguments = Some(vec![self.type_ref("P")].into());
        let attr_name = self.id("id");
        let attr_value = self.lit(SyntaxKind::StringLiteral, "x");
        let attribute = self.node(
            SyntaxKind::JsxAttribute,
            NodeData::JsxAttribute(JsxAttributeData {
                name: attr_name,
                initializer: attr_value,
            }),
        );
        let spread_target = self.id("props");
        let spread = self.wrapped(SyntaxKind::JsxSpreadAttribute, spread_target);
        let attributes = self.node(
            SyntaxKind::JsxAttributes,
            NodeData::JsxAttributes(JsxAttributesData {
                properties: vec![attribute, spread].into(),
            }),
        );
        self.node(
            kind,
            NodeData::JsxOpening(JsxOpeningData {
                tag_name,
                type_arguments,
                attributes,
            }),
        )
    }
}

/// Build at least one node of every node kind, each with all of its
/// optional children present.
pub(crate) fn build_every_kind(b: &mut TreeBuilder) {
    use SyntaxKind as K;

    // Names
    let left = b.id("a");
    let right = b.id("b");
    b.node(
        K::QualifiedName,
        NodeData::QualifiedName(QualifiedNameData { left, right }),
    );
    let key = b.id("k");
    b.wrapped(K::ComputedPropertyName, key);

    // Signature elements
    let modifiers = b.mods(&[K::ConstKeyword]);
    let name = b.id("T");
    let constraint = b.type_ref("C");
    let default = b.type_ref("D");
    let expression = b.id("e");
    b.node(
        K::TypeParameter,
        NodeData::TypeParameter(TypeParameterData {
            modifiers,
            name,
            constraint,
            default,
            expression,
        }),
    );
    let modifiers = b.mods(&[K::PublicKeyword]);
    let dot_dot_dot_token = b.tok(K::DotDotDotToken);
    let name = b.id("p");
    let question_token = b.tok(K::QuestionToken);
    let type_annotation = b.type_ref("P");
    let initializer = b.id("v");
    b.node(
        K::Parameter,
        NodeData::Parameter(ParameterData {
            modifiers,
            dot_dot_dot_token,
            name,
            question_token,
            type_annotation,
            initializer,
        }),
    );
    let target = b.id("dec");
    b.wrapped(K::Decorator, target);

    // Members
    let modifiers = b.mods(&[K::ReadonlyKeyword]);
    let name = b.id("x");
    let question_token = b.tok(K::QuestionToken);
    let type_annotation = b.type_ref("X");
    b.node(
        K::PropertySignature,
        NodeData::PropertySignature(PropertySignatureData {
            modifiers,
            name,
            question_token,
            type_annotation,
        }),
    );
    let modifiers = b.mods(&[K::StaticKeyword]);
    let name = b.id("y");
    let question_token = b.tok(K::QuestionToken);
    let exclamation_token = b.tok(K::ExclamationToken);
    let type_annotation = b.type_ref("Y");
    let initializer = b.id("init");
    b.node(
        K::PropertyDeclaration,
        NodeData::PropertyDeclaration(PropertyDeclarationData {
            modifiers,
            name,
            question_token,
            exclamation_token,
            type_annotation,
            initializer,
        }),
    );
    b.function(K::MethodSignature, &[], false, Some("m"), true);
    b.function(K::MethodDeclaration, &[K::AsyncKeyword], true, Some("m"), true);
    let modifiers = b.mods(&[K::StaticKeyword]);
    let body = b.block(K::Block, vec![]);
    b.node(
        K::ClassStaticBlockDeclaration,
        NodeData::ClassStaticBlock(ClassStaticBlockData { modifiers, body }),
    );
    b.function(K::Constructor, &[K::PublicKeyword], false, None, false);
    b.function(K::GetAccessor, &[K::PrivateKeyword], false, Some("g"), false);
    b.function(K::SetAccessor, &[K::ProtectedKeyword], false, Some("s"), false);
    b.signature(K::CallSignature, &[]);
    b.signature(K::ConstructSignature, &[]);
    b.signature(K::IndexSignature, &[K::ReadonlyKeyword]);

    // Types
    let asserts_modifier = b.tok(K::AssertsKeyword);
    let parameter_name = b.id("x");
    let type_node = b.type_ref("T");
    b.node(
        K::TypePredicate,
        NodeData::TypePredicate(TypePredicateData {
            asserts_modifier,
            parameter_name,
            type_node,
        }),
    );
    let type_name = b.id("Map");
    let type_arguments = Some(vec![b.type_ref("K"), b.type_ref("V")].into());
    b.node(
        K::TypeReference,
        NodeData::TypeReference(TypeReferenceData {
            type_name,
            type_arguments,
        }),
    );
    b.signature(K::FunctionType, &[]);
    b.signature(K::ConstructorType, &[K::AbstractKeyword]);
    let expr_name = b.id("value");
    let type_arguments = Some(vec![b.type_ref("T")].into());
    b.node(
        K::TypeQuery,
        NodeData::TypeQuery(TypeQueryData {
            expr_name,
            type_arguments,
        }),
    );
    let member = b.signature(K::CallSignature, &[]);
    b.node(
        K::TypeLiteral,
        NodeData::TypeLiteral(TypeLiteralData {
            members: vec![member].into(),
        }),
    );
    b.wrapped_type(K::ArrayType);
    let dot_dot_dot_token = b.tok(K::DotDotDotToken);
    let name = b.id("rest");
    let question_token = b.tok(K::QuestionToken);
    let type_node = b.type_ref("T");
    let named_member = b.node(
        K::NamedTupleMember,
        NodeData::NamedTupleMember(NamedTupleMemberData {
            dot_dot_dot_token,
            name,
            question_token,
            type_node,
        }),
    );
    let optional = b.wrapped_type(K::OptionalType);
    let rest = b.wrapped_type(K::RestType);
    b.node(
        K::TupleType,
        NodeData::TupleType(TupleTypeData {
            elements: vec![named_member, optional, rest].into(),
        }),
    );
    b.union_or_intersection(K::UnionType);
    b.union_or_intersection(K::IntersectionType);
    let check_type = b.type_ref("A");
    let type_parameter = b.type_parameter("U");
    let extends_type = b.node(
        K::InferType,
        NodeData::InferType(InferTypeData { type_parameter }),
    );
    let true_type = b.type_ref("B");
    let false_type = b.type_ref("C");
    b.node(
        K::ConditionalType,
        NodeData::ConditionalType(ConditionalTypeData {
            check_type,
            extends_type,
            true_type,
            false_type,
        }),
    );
    b.wrapped_type(K::ParenthesizedType);
    b.tok(K::ThisType);
    let type_node = b.type_ref("T");
    b.node(
        K::TypeOperator,
        NodeData::TypeOperator(TypeOperatorData {
            operator: K::KeyOfKeyword,
            type_node,
        }),
    );
    let object_type = b.type_ref("T");
    let index_type = b.type_ref("K");
    b.node(
        K::IndexedAccessType,
        NodeData::IndexedAccessType(IndexedAccessTypeData {
            object_type,
            index_type,
        }),
    );
    let readonly_token = b.tok(K::ReadonlyKeyword);
    let type_parameter = b.type_parameter("P");
    let name_type = b.type_ref("N");
    let question_token = b.tok(K::QuestionToken);
    let type_node = b.type_ref("V");
    let members = Some(vec![b.signature(K::CallSignature, &[])].into());
    b.node(
        K::MappedType,
        NodeData::MappedType(MappedTypeData {
            readonly_token,
            type_parameter,
            name_type,
            question_token,
            type_node,
            members,
        }),
    );
    let literal = b.lit(K::StringLiteral, "s");
    b.node(K::LiteralType, NodeData::LiteralType(LiteralTypeData { literal }));
    b.template(K::TemplateLiteralType, K::TemplateLiteralTypeSpan);

    // Binding patterns
    let element = b.binding_element();
    b.node(
        K::ObjectBindingPattern,
        NodeData::BindingPattern(BindingPatternData {
            elements: vec![element].into(),
        }),
    );
    let hole = b.tok(K::OmittedExpression);
    let element = b.binding_element();
    b.node(
        K::ArrayBindingPattern,
        NodeData::BindingPattern(BindingPatternData {
            elements: vec![hole, element].into(),
        }),
    );

    // Expressions
    let first = b.lit(K::NumericLiteral, "1");
    let spread_target = b.id("xs");
    let spread = b.wrapped(K::SpreadElement, spread_target);
    b.node(
        K::ArrayLiteralExpression,
        NodeData::ArrayLiteral(ArrayLiteralData {
            elements: vec![first, spread].into(),
        }),
    );
    let name = b.id("a");
    let question_token = b.tok(K::QuestionToken);
    let initializer = b.id("b");
    let assignment = b.node(
        K::PropertyAssignment,
        NodeData::PropertyAssignment(PropertyAssignmentData {
            name,
            question_token,
            initializer,
        }),
    );
    let name = b.id("c");
    let question_token = b.tok(K::QuestionToken);
    let equals_token = b.tok(K::EqualsToken);
    let object_assignment_initializer = b.id("d");
    let shorthand = b.node(
        K::ShorthandPropertyAssignment,
        NodeData::ShorthandPropertyAssignment(ShorthandPropertyAssignmentData {
            name,
            question_token,
            equals_token,
            object_assignment_initializer,
        }),
    );
    let spread_target = b.id("rest");
    let spread = b.wrapped(K::SpreadAssignment, spread_target);
    b.node(
        K::ObjectLiteralExpression,
        NodeData::ObjectLiteral(ObjectLiteralData {
            properties: vec![assignment, shorthand, spread].into(),
        }),
    );
    let expression = b.id("o");
    let question_dot_token = b.tok(K::QuestionDotToken);
    let name_or_argument = b.id("p");
    b.node(
        K::PropertyAccessExpression,
        NodeData::AccessExpr(AccessExprData {
            expression,
            question_dot_token,
            name_or_argument,
        }),
    );
    let expression = b.id("o");
    let question_dot_token = b.tok(K::QuestionDotToken);
    let name_or_argument = b.lit(K::NumericLiteral, "0");
    b.node(
        K::ElementAccessExpression,
        NodeData::AccessExpr(AccessExprData {
            expression,
            question_dot_token,
            name_or_argument,
        }),
    );
    for kind in [K::CallExpression, K::NewExpression] {
        let expression = b.id("f");
        let question_dot_token = if kind == K::CallExpression {
            b.tok(K::QuestionDotToken)
        } else {
            NodeIndex::NONE
        };
        let type_arguments = Some(vec![b.type_ref("T")].into());
        let arguments = Some(vec![b.id("x"), b.id("y")].into());
        b.node(
            kind,
            NodeData::CallExpr(CallExprData {
                expression,
                question_dot_token,
                type_arguments,
                arguments,
            }),
        );
    }
    let tag = b.id("tag");
    let type_arguments = Some(vec![b.type_ref("T")].into());
    let template = b.lit(K::NoSubstitutionTemplateLiteral, "t");
    b.node(
        K::TaggedTemplateExpression,
        NodeData::TaggedTemplate(TaggedTemplateData {
            tag,
            type_arguments,
            template,
        }),
    );
    let type_node = b.type_ref("T");
    let expression = b.id("x");
    b.node(
        K::TypeAssertionExpression,
        NodeData::TypeAssertion(TypeAssertionData {
            type_node,
            expression,
        }),
    );
    let inner = b.id("x");
    b.wrapped(K::ParenthesizedExpression, inner);
    b.function(K::FunctionExpression, &[K::AsyncKeyword], true, Some("f"), false);
    b.function(K::ArrowFunction, &[K::AsyncKeyword], false, None, false);
    for kind in [
        K::DeleteExpression,
        K::TypeOfExpression,
        K::VoidExpression,
        K::AwaitExpression,
        K::NonNullExpression,
        K::PartiallyEmittedExpression,
    ] {
        let operand = b.id("x");
        b.wrapped(kind, operand);
    }
    b.unary(K::PrefixUnaryExpression, K::ExclamationToken);
    b.unary(K::PostfixUnaryExpression, K::PlusPlusToken);
    let left = b.id("a");
    b.binary(left, K::PlusToken, "b");
    let condition = b.id("c");
    let question_token = b.tok(K::QuestionToken);
    let when_true = b.id("t");
    let colon_token = b.tok(K::ColonToken);
    let when_false = b.id("f");
    b.node(
        K::ConditionalExpression,
        NodeData::ConditionalExpr(ConditionalExprData {
            condition,
            question_token,
            when_true,
            colon_token,
            when_false,
        }),
    );
    b.template(K::TemplateExpression, K::TemplateSpan);
    let asterisk_token = b.tok(K::AsteriskToken);
    let expression = b.id("g");
    b.node(
        K::YieldExpression,
        NodeData::Yield(YieldData {
            asterisk_token,
            expression,
        }),
    );
    b.class_like(K::ClassExpression, &[K::AbstractKeyword]);
    for kind in [K::AsExpression, K::SatisfiesExpression] {
        let expression = b.id("x");
        let type_node = b.type_ref("T");
        b.node(
            kind,
            NodeData::AsExpr(AsExprData {
                expression,
                type_node,
            }),
        );
    }
    b.import_meta();

    // Statements
    b.tok(K::EmptyStatement);
    b.tok(K::DebuggerStatement);
    b.variable_statement(&[K::DeclareKeyword], "v", "init");
    let expression = b.id("x");
    b.expr_stmt(expression);
    let expression = b.id("c");
    let then_statement = b.block(K::Block, vec![]);
    let else_statement = b.block(K::Block, vec![]);
    b.node(
        K::IfStatement,
        NodeData::If(IfStatementData {
            expression,
            then_statement,
            else_statement,
        }),
    );
    let expression = b.id("o");
    let then_statement = b.block(K::Block, vec![]);
    b.node(
        K::WithStatement,
        NodeData::If(IfStatementData {
            expression,
            then_statement,
            else_statement: NodeIndex::NONE,
        }),
    );
    b.loop_statement(K::DoStatement);
    b.loop_statement(K::WhileStatement);
    b.loop_statement(K::ForStatement);
    b.for_in_of(K::ForInStatement);
    b.for_in_of(K::ForOfStatement);
    for kind in [K::ContinueStatement, K::BreakStatement] {
        let label = b.id("outer");
        b.node(kind, NodeData::Jump(JumpData { label }));
    }
    for kind in [K::ReturnStatement, K::ThrowStatement] {
        let expression = b.id("x");
        b.wrapped(kind, expression);
    }
    let expression = b.id("x");
    let case_expression = b.lit(K::NumericLiteral, "1");
    let case_body = b.expr_stmt_of("a");
    let case_clause = b.node(
        K::CaseClause,
        NodeData::CaseClause(CaseClauseData {
            expression: case_expression,
            statements: vec![case_body].into(),
        }),
    );
    let default_body = b.expr_stmt_of("b");
    let default_clause = b.node(
        K::DefaultClause,
        NodeData::CaseClause(CaseClauseData {
            expression: NodeIndex::NONE,
            statements: vec![default_body].into(),
        }),
    );
    let case_block = b.node(
        K::CaseBlock,
        NodeData::CaseBlock(CaseBlockData {
            clauses: vec![case_clause, default_clause].into(),
        }),
    );
    b.node(
        K::SwitchStatement,
        NodeData::Switch(SwitchData {
            expression,
            case_block,
        }),
    );
    let label = b.id("outer");
    let statement = b.block(K::Block, vec![]);
    b.node(
        K::LabeledStatement,
        NodeData::Labeled(LabeledData { label, statement }),
    );
    let try_block = b.block(K::Block, vec![]);
    let name = b.id("e");
    let variable_declaration = b.node(
        K::VariableDeclaration,
        NodeData::VariableDeclaration(VariableDeclarationData {
            name,
            exclamation_token: NodeIndex::NONE,
            type_annotation: NodeIndex::NONE,
            initializer: NodeIndex::NONE,
        }),
    );
    let block = b.block(K::Block, vec![]);
    let catch_clause = b.node(
        K::CatchClause,
        NodeData::CatchClause(CatchClauseData {
            variable_declaration,
            block,
        }),
    );
    let finally_block = b.block(K::Block, vec![]);
    b.node(
        K::TryStatement,
        NodeData::Try(TryData {
            try_block,
            catch_clause,
            finally_block,
        }),
    );
    let name = b.id("v");
    let exclamation_token = b.tok(K::ExclamationToken);
    let type_annotation = b.type_ref("T");
    let initializer = b.id("x");
    b.node(
        K::VariableDeclaration,
        NodeData::VariableDeclaration(VariableDeclarationData {
            name,
            exclamation_token,
            type_annotation,
            initializer,
        }),
    );

    // Declarations
    b.function(K::FunctionDeclaration, &[K::ExportKeyword, K::DefaultKeyword], true, Some("f"), false);
    b.class_like(K::ClassDeclaration, &[K::ExportKeyword]);
    b.class_like(K::InterfaceDeclaration, &[K::DeclareKeyword]);
    let modifiers = b.mods(&[K::ExportKeyword]);
    let name = b.id("Alias");
    let type_parameters = Some(vec![b.type_parameter("T")].into());
    let type_node = b.type_ref("T");
    b.node(
        K::TypeAliasDeclaration,
        NodeData::TypeAlias(TypeAliasData {
            modifiers,
            name,
            type_parameters,
            type_node,
        }),
    );
    let modifiers = b.mods(&[K::ConstKeyword]);
    let name = b.id("E");
    let member_name = b.id("A");
    let initializer = b.lit(K::NumericLiteral, "1");
    let member = b.node(
        K::EnumMember,
        NodeData::EnumMember(EnumMemberData {
            name: member_name,
            initializer,
        }),
    );
    b.node(
        K::EnumDeclaration,
        NodeData::Enum(EnumData {
            modifiers,
            name,
            members: vec![member].into(),
        }),
    );
    let modifiers = b.mods(&[K::DeclareKeyword]);
    let name = b.id("N");
    let inner = b.expr_stmt_of("x");
    let body = b.block(K::ModuleBlock, vec![inner]);
    b.node(
        K::ModuleDeclaration,
        NodeData::Module(ModuleData {
            modifiers,
            name,
            body,
        }),
    );
    let name = b.id("Lib");
    b.node(
        K::NamespaceExportDeclaration,
        NodeData::NamespaceBinding(NamespaceBindingData { name }),
    );
    let modifiers = b.mods(&[K::ExportKeyword]);
    let name = b.id("fs");
    let module_name = b.lit(K::StringLiteral, "fs");
    let module_reference = b.wrapped(K::ExternalModuleReference, module_name);
    b.node(
        K::ImportEqualsDeclaration,
        NodeData::ImportEquals(ImportEqualsData {
            modifiers,
            is_type_only: false,
            name,
            module_reference,
        }),
    );
    let name = b.id("def");
    let ns_name = b.id("ns");
    let named_bindings = b.node(
        K::NamespaceImport,
        NodeData::NamespaceBinding(NamespaceBindingData { name: ns_name }),
    );
    let import_clause = b.node(
        K::ImportClause,
        NodeData::ImportClause(ImportClauseData {
            is_type_only: false,
            name,
            named_bindings,
        }),
    );
    let module_specifier = b.lit(K::StringLiteral, "mod");
    b.node(
        K::ImportDeclaration,
        NodeData::ImportDecl(ImportDeclData {
            modifiers: None,
            import_clause,
            module_specifier,
        }),
    );
    let specifier = b.specifier(K::ImportSpecifier);
    b.node(
        K::NamedImports,
        NodeData::NamedImportsOrExports(NamedImportsOrExportsData {
            elements: vec![specifier].into(),
        }),
    );
    let modifiers = b.mods(&[K::DeclareKeyword]);
    let expression = b.id("x");
    b.node(
        K::ExportAssignment,
        NodeData::ExportAssignment(ExportAssignmentData {
            modifiers,
            is_export_equals: true,
            expression,
        }),
    );
    let modifiers = b.mods(&[K::DeclareKeyword]);
    let specifier = b.specifier(K::ExportSpecifier);
    let export_clause = b.node(
        K::NamedExports,
        NodeData::NamedImportsOrExports(NamedImportsOrExportsData {
            elements: vec![specifier].into(),
        }),
    );
    let module_specifier = b.lit(K::StringLiteral, "mod");
    b.node(
        K::ExportDeclaration,
        NodeData::ExportDecl(ExportDeclData {
            modifiers,
            is_type_only: false,
            export_clause,
            module_specifier,
        }),
    );
    let name = b.id("ns");
    b.node(
        K::NamespaceExport,
        NodeData::NamespaceBinding(NamespaceBindingData { name }),
    );
    let modifiers = b.mods(&[K::ExportKeyword]);
    b.node(
        K::MissingDeclaration,
        NodeData::MissingDeclaration(MissingDeclarationData { modifiers }),
    );

    // JSX
    let opening = b.jsx_opening(K::JsxOpeningElement);
    let text = b.lit(K::JsxText, "hello");
    let dot_dot_dot_token = b.tok(K::DotDotDotToken);
    let expression = b.id("items");
    let jsx_expression = b.node(
        K::JsxExpression,
        NodeData::JsxExpression(JsxExpressionData {
            dot_dot_dot_token,
            expression,
        }),
    );
    let tag_name = b.id("div");
    let closing = b.node(
        K::JsxClosingElement,
        NodeData::JsxClosing(JsxClosingData { tag_name }),
    );
    b.node(
        K::JsxElement,
        NodeData::JsxElement(JsxElementData {
            opening,
            children: vec![text, jsx_expression].into(),
            closing,
        }),
    );
    b.jsx_opening(K::JsxSelfClosingElement);
    let opening = b.tok(K::JsxOpeningFragment);
    let namespace = b.id("svg");
    let name = b.id("rect");
    let child = b.node(
        K::JsxNamespacedName,
        NodeData::JsxNamespacedName(JsxNamespacedNameData { namespace, name }),
    );
    let closing = b.tok(K::JsxClosingFragment);
    b.node(
        K::JsxFragment,
        NodeData::JsxElement(JsxElementData {
            opening,
            children: vec![child].into(),
            closing,
        }),
    );

    let statement = b.expr_stmt_of("done");
    b.source_file("every_kind.ts", vec![statement]);
}

impl TreeBuilder {
    pub fn expr_stmt_of(&mut self, text: &str) -> NodeIndex {
        let expression = self.id(text);
        self.expr_stmt(expression)
    }
}

/// Children of `node`, collected through `for_each_child`.
pub(crate) fn collect_children(arena: &NodeArena, node: NodeIndex) -> Vec<NodeIndex> {
    let mut visited = Vec::new();
    let result: Option<()> = for_each_child(arena, node, |child| {
        visited.push(child);
        None
    });
    assert!(result.is_none());
    visited
}

/// Children of `node`, collected through `for_each_child_optimized`.
pub(crate) fn collect_children_optimized(arena: &NodeArena, node: NodeIndex) -> Vec<NodeIndex> {
    let mut visited = Vec::new();
    for_each_child_optimized(arena, node, |child| visited.push(child));
    visited
}
