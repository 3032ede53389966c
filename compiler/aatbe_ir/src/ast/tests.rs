use super::*;
use crate::Span;
use pretty_assertions::assert_eq;

fn ident(name: &str) -> Expression {
    Expression::atom(Terminal::Identifier(name.to_string()), Span::DUMMY)
}

fn int(value: u64) -> Expression {
    Expression::atom(Terminal::integer(value), Span::DUMMY)
}

// === Types ===

#[test]
fn primitive_type_words() {
    assert_eq!(TypeNode::primitive("int8"), Some(TypeNode::SInt(IntWidth::W8)));
    assert_eq!(TypeNode::primitive("uint64"), Some(TypeNode::UInt(IntWidth::W64)));
    assert_eq!(TypeNode::primitive("float32"), Some(TypeNode::Float(FloatWidth::W32)));
    assert_eq!(TypeNode::primitive("str"), Some(TypeNode::Str));
    assert_eq!(TypeNode::primitive("int12"), None);
    assert_eq!(TypeNode::primitive("int08"), None);
    assert_eq!(TypeNode::primitive("int"), None);
    assert_eq!(TypeNode::primitive("Foo"), None);
}

#[test]
fn type_display_nests() {
    let ty = TypeNode::Ref(Box::new(TypeNode::Array(
        Box::new(TypeNode::Pointer(Box::new(TypeNode::UInt(IntWidth::W8)))),
        16,
    )));
    assert_eq!(ty.to_string(), "&[*uint8; 16]");
    assert_eq!(TypeNode::Slice(Box::new(TypeNode::Bool)).to_string(), "[bool]");
    assert_eq!(TypeNode::Unit.to_string(), "()");
}

// === Terminals ===

#[test]
fn integer_display_uses_suffix_signedness() {
    let negative = Terminal::Integer {
        value: (-5i64) as u64,
        ty: TypeNode::SInt(IntWidth::W8),
    };
    assert_eq!(negative.to_string(), "-5int8");
    assert_eq!(Terminal::integer(42).to_string(), "42");

    let unsigned = Terminal::Integer {
        value: 7,
        ty: TypeNode::UInt(IntWidth::W16),
    };
    assert_eq!(unsigned.to_string(), "7uint16");
}

#[test]
fn string_and_char_display_escape() {
    assert_eq!(Terminal::String("a\"b\n".into()).to_string(), r#""a\"b\n""#);
    assert_eq!(Terminal::Character('\t').to_string(), r"'\t'");
    assert_eq!(Terminal::Unit.to_string(), "()");
}

// === Expressions ===

#[test]
fn tuple_and_block_format() {
    let tuple = Expression::new(ExpressionKind::Tuple(vec![int(1), int(2)]), Span::DUMMY);
    assert_eq!(tuple.to_string(), "(1, 2, )");
    assert_eq!(tuple.kind_name(), "Tuple");

    let block = Expression::new(ExpressionKind::Block(vec![int(1), int(2)]), Span::DUMMY);
    assert_eq!(block.to_string(), "{1; 2; }");
}

#[test]
fn call_formats_argument_tuple() {
    let call = Expression::new(
        ExpressionKind::Call {
            callee: Box::new(ident("printf")),
            args: vec![int(1)],
        },
        Span::DUMMY,
    );
    assert_eq!(call.to_string(), "printf((1, ))");
}

#[test]
fn if_chain_format() {
    let cond = |b| Expression::atom(Terminal::Boolean(b), Span::DUMMY);
    let expr = Expression::new(
        ExpressionKind::If(vec![
            IfBranch { cond: Some(cond(true)), body: int(1) },
            IfBranch { cond: Some(cond(false)), body: int(0) },
            IfBranch { cond: None, body: int(1) },
        ]),
        Span::DUMMY,
    );
    assert_eq!(expr.to_string(), "if true 1 else if false 0 else 1");
}

#[test]
fn unary_binary_accessor_format() {
    let neg = Expression::new(
        ExpressionKind::Unary { op: UnaryOp::LogicalNot, operand: Box::new(ident("x")) },
        Span::DUMMY,
    );
    assert_eq!(neg.to_string(), "!x");

    let sum = Expression::new(
        ExpressionKind::Binary {
            op: BinaryOp::LessThanOrEqual,
            left: Box::new(ident("a")),
            right: Box::new(int(3)),
        },
        Span::DUMMY,
    );
    assert_eq!(sum.to_string(), "a <= 3");

    let access = Expression::new(
        ExpressionKind::Accessor { object: Box::new(ident("foo")), member: "bar".into() },
        Span::DUMMY,
    );
    assert_eq!(access.to_string(), "foo.bar");
}

#[test]
fn operator_tables_agree() {
    for symbol in ["+", "-", "*", "/", "%", "&", "|", "^", "<<", ">>", "&&", "||", "==", "!=", "<", "<=", ">", ">="] {
        let op = BinaryOp::from_symbol(symbol);
        assert_eq!(op.map(BinaryOp::symbol), Some(symbol));
    }
    for symbol in ["-", "!", "~", "&", "*"] {
        assert_eq!(UnaryOp::from_symbol(symbol).map(UnaryOp::symbol), Some(symbol));
    }
    assert!(BinaryOp::Multiplication.precedence() > BinaryOp::Addition.precedence());
    assert!(BinaryOp::LogicalAnd.precedence() > BinaryOp::LogicalOr.precedence());
}

#[test]
fn new_expression_has_empty_slot() {
    let mut expr = int(3);
    assert!(!expr.ty().is_resolved());
    expr.ty_mut().fill(1, 4);
    assert!(expr.ty().is_resolved());
}

// === Declarations ===

#[test]
fn function_format() {
    let func = FunctionDecl {
        is_extern: false,
        name: "foo".into(),
        params: ParameterList::new(vec![ParameterBinding::new(
            "a",
            TypeNode::SInt(IntWidth::W32),
            Span::DUMMY,
        )]),
        return_type: TypeNode::SInt(IntWidth::W32),
        body: Some(ident("a")),
        is_variadic: false,
        span: Span::DUMMY,
        ty: crate::TypeSlot::EMPTY,
    };
    assert_eq!(func.to_string(), "Function(foo, args (a : int32, ), ret int32) = a");
}

#[test]
fn extern_variadic_function_format() {
    let func = FunctionDecl {
        is_extern: true,
        name: "printf".into(),
        params: ParameterList::new(vec![ParameterBinding::new("fmt", TypeNode::Str, Span::DUMMY)]),
        return_type: TypeNode::Unit,
        body: None,
        is_variadic: true,
        span: Span::DUMMY,
        ty: crate::TypeSlot::EMPTY,
    };
    assert_eq!(func.to_string(), "extern Function(printf, args (fmt : str, ..., ), ret ())");
}

#[test]
fn struct_format_and_lookup() {
    let decl = StructDecl {
        name: "Test".into(),
        members: MemberList::new(vec![
            MemberBinding::new("a", TypeNode::Typename("foo".into()), Visibility::Internal, Span::DUMMY),
            MemberBinding::new("b", TypeNode::Typename("baz".into()), Visibility::Public, Span::DUMMY),
        ]),
        span: Span::DUMMY,
        ty: crate::TypeSlot::EMPTY,
    };
    assert_eq!(decl.to_string(), "Struct(Test, members (a : foo, public b : baz, ))");
    assert!(decl.members.find("b").is_some_and(MemberBinding::is_public));
    assert!(decl.members.find("c").is_none());

    let mut module = ModuleNode::new();
    module.push(ModuleStatement::Struct(decl));
    assert_eq!(module.structs().count(), 1);
    assert_eq!(module.functions().count(), 0);
    assert_eq!(module.statements[0].kind_name(), "Struct");
}
