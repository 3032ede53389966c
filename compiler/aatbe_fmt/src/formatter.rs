//! Expression, type and literal printing.
//!
//! Trees produced by the parser print back to the same token sequence,
//! with three exceptions that reparse identically: `then` after every
//! `if` condition, `;` between block statements, and a space after a
//! prefix operator that would otherwise fuse with its operand.
//!
//! Binary operations are only read back inside tuples, call arguments,
//! function bodies and whole inputs. A built tree that nests one
//! anywhere else, or under a looser operator, is printed in parentheses.

use aatbe_ir::ast::{Expression, ExpressionKind, Terminal, TypeNode, UnaryOp};

use crate::context::{FormatConfig, FormatContext};
use crate::emitter::Emitter;

/// Writes nodes into a [`FormatContext`].
pub struct Formatter<'c, E: Emitter> {
    ctx: &'c mut FormatContext<E>,
}

impl<'c, E: Emitter> Formatter<'c, E> {
    pub fn new(ctx: &'c mut FormatContext<E>) -> Self {
        Formatter { ctx }
    }

    pub fn ctx(&mut self) -> &mut FormatContext<E> {
        self.ctx
    }

    pub fn format_type(&mut self, ty: &TypeNode) {
        self.ctx.emit(&ty.to_string());
    }

    pub fn format_terminal(&mut self, terminal: &Terminal) {
        self.ctx.emit(&terminal.to_string());
    }

    pub fn format_expr(&mut self, expr: &Expression) {
        match expr.kind() {
            ExpressionKind::Atom(terminal) => self.format_terminal(terminal),
            ExpressionKind::Unary { op, operand } => {
                self.ctx.emit(op.symbol());
                if fuses(*op, operand) {
                    self.ctx.emit_space();
                }
                self.format_operand(operand);
            }
            ExpressionKind::Binary { op, left, right } => {
                let precedence = op.precedence();
                self.format_grouped(left, binds_looser(left, precedence));
                self.ctx.emit_space();
                self.ctx.emit(op.symbol());
                self.ctx.emit_space();
                self.format_grouped(right, binds_looser(right, precedence + 1));
            }
            ExpressionKind::Tuple(elements) => {
                self.ctx.emit("(");
                self.format_list(elements);
                self.ctx.emit(")");
            }
            ExpressionKind::Call { callee, args } => {
                self.format_operand(callee);
                self.ctx.emit("(");
                self.format_list(args);
                self.ctx.emit(")");
            }
            ExpressionKind::Block(statements) => self.format_block(statements),
            ExpressionKind::If(branches) => {
                for (i, branch) in branches.iter().enumerate() {
                    if i > 0 {
                        self.ctx.emit(" else ");
                    }
                    if let Some(cond) = &branch.cond {
                        self.ctx.emit("if ");
                        self.format_operand(cond);
                        self.ctx.emit(" then ");
                    }
                    self.format_operand(&branch.body);
                }
            }
            ExpressionKind::Loop(body) => {
                self.ctx.emit("loop ");
                self.format_operand(body);
            }
            ExpressionKind::Accessor { object, member } => {
                self.format_operand(object);
                self.ctx.emit(".");
                self.ctx.emit(member);
            }
        }
    }

    /// Print `expr` where a binary operation would not be read back.
    fn format_operand(&mut self, expr: &Expression) {
        let is_binary = matches!(expr.kind(), ExpressionKind::Binary { .. });
        self.format_grouped(expr, is_binary);
    }

    fn format_grouped(&mut self, expr: &Expression, parenthesize: bool) {
        if parenthesize {
            self.ctx.emit("(");
            self.format_expr(expr);
            self.ctx.emit(")");
        } else {
            self.format_expr(expr);
        }
    }

    fn format_list(&mut self, items: &[Expression]) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.ctx.emit(", ");
            }
            self.format_expr(item);
        }
    }

    fn format_block(&mut self, statements: &[Expression]) {
        if statements.is_empty() {
            self.ctx.emit("{}");
            return;
        }
        self.ctx.emit("{");
        self.ctx.indent();
        for (i, statement) in statements.iter().enumerate() {
            self.ctx.newline();
            self.format_operand(statement);
            if i + 1 < statements.len() {
                self.ctx.emit(";");
            }
        }
        self.ctx.dedent();
        self.ctx.newline();
        self.ctx.emit("}");
    }
}

/// First character `expr` prints as.
fn leading_char(expr: &Expression) -> Option<char> {
    match expr.kind() {
        ExpressionKind::Atom(terminal) => terminal.to_string().chars().next(),
        ExpressionKind::Unary { op, .. } => op.symbol().chars().next(),
        ExpressionKind::Binary { .. } => Some('('),
        ExpressionKind::Call { callee, .. } => leading_char(callee),
        ExpressionKind::Accessor { object, .. } => leading_char(object),
        ExpressionKind::Tuple(_) => Some('('),
        ExpressionKind::Block(_) => Some('{'),
        ExpressionKind::If(_) => Some('i'),
        ExpressionKind::Loop(_) => Some('l'),
    }
}

/// Whether `expr` is an operation that binds looser than `precedence`.
fn binds_looser(expr: &Expression, precedence: u8) -> bool {
    matches!(expr.kind(), ExpressionKind::Binary { op, .. } if op.precedence() < precedence)
}

/// Whether `op` written directly before `operand` would lex differently:
/// `-1` is a literal, `--` and `&&` are single symbols.
fn fuses(op: UnaryOp, operand: &Expression) -> bool {
    match (op, leading_char(operand)) {
        (UnaryOp::Negation, Some(c)) => c == '-' || c.is_ascii_digit(),
        (UnaryOp::AddressOf, Some('&')) => true,
        _ => false,
    }
}

/// Print one expression.
pub fn format_expr(expr: &Expression, config: FormatConfig) -> String {
    let mut ctx = FormatContext::new(config);
    Formatter::new(&mut ctx).format_expr(expr);
    ctx.into_emitter().output()
}
