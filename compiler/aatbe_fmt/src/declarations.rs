//! Declaration and module printing.

use aatbe_ir::ast::{FunctionDecl, ModuleNode, ModuleStatement, StructDecl, TypeNode};

use crate::context::{FormatConfig, FormatContext};
use crate::emitter::{Emitter, StringEmitter};
use crate::formatter::Formatter;

/// Prints module statements separated by blank lines.
pub struct ModuleFormatter<E: Emitter = StringEmitter> {
    ctx: FormatContext<E>,
}

impl ModuleFormatter<StringEmitter> {
    pub fn new(config: FormatConfig) -> Self {
        ModuleFormatter {
            ctx: FormatContext::new(config),
        }
    }

    pub fn finish(self) -> String {
        self.ctx.finish()
    }
}

impl<E: Emitter> ModuleFormatter<E> {
    pub fn with_context(ctx: FormatContext<E>) -> Self {
        ModuleFormatter { ctx }
    }

    pub fn format_module(&mut self, module: &ModuleNode) {
        for (i, statement) in module.statements.iter().enumerate() {
            if i > 0 {
                self.ctx.newline();
            }
            self.format_statement(statement);
            self.ctx.newline();
        }
    }

    pub fn format_statement(&mut self, statement: &ModuleStatement) {
        match statement {
            ModuleStatement::Function(func) => self.format_function(func),
            ModuleStatement::Struct(decl) => self.format_struct(decl),
        }
    }

    /// `[extern] fn name(params) [-> type] [= body]`
    ///
    /// The parameter list is always printed, so a bodiless declaration
    /// followed by another statement still reparses.
    pub fn format_function(&mut self, func: &FunctionDecl) {
        if func.is_extern {
            self.ctx.emit("extern ");
        }
        self.ctx.emit("fn ");
        self.ctx.emit(&func.name);

        self.ctx.emit("(");
        for (i, param) in func.params.iter().enumerate() {
            if i > 0 {
                self.ctx.emit(", ");
            }
            self.ctx.emit(&param.name);
            self.ctx.emit(": ");
            Formatter::new(&mut self.ctx).format_type(&param.ty);
        }
        if func.is_variadic {
            self.ctx.emit(", ...");
        }
        self.ctx.emit(")");

        if func.return_type != TypeNode::Unit {
            self.ctx.emit(" -> ");
            Formatter::new(&mut self.ctx).format_type(&func.return_type);
        }

        if let Some(body) = &func.body {
            self.ctx.emit(" = ");
            Formatter::new(&mut self.ctx).format_expr(body);
        }
    }

    /// `struct Name { member; member }` with one member per line.
    pub fn format_struct(&mut self, decl: &StructDecl) {
        self.ctx.emit("struct ");
        self.ctx.emit(&decl.name);
        if decl.members.is_empty() {
            self.ctx.emit(" {}");
            return;
        }

        self.ctx.emit(" {");
        self.ctx.indent();
        for (i, member) in decl.members.iter().enumerate() {
            self.ctx.newline();
            if member.is_public() {
                self.ctx.emit("public ");
            }
            self.ctx.emit(&member.name);
            self.ctx.emit(": ");
            Formatter::new(&mut self.ctx).format_type(&member.ty);
            if i + 1 < decl.members.len() {
                self.ctx.emit(";");
            }
        }
        self.ctx.dedent();
        self.ctx.newline();
        self.ctx.emit("}");
    }

    pub fn into_context(self) -> FormatContext<E> {
        self.ctx
    }
}

/// Print a whole module. The result ends with a single newline unless the
/// module is empty.
pub fn format_module(module: &ModuleNode, config: FormatConfig) -> String {
    let mut formatter = ModuleFormatter::new(config);
    formatter.format_module(module);
    formatter.finish()
}

/// Print one statement without a trailing newline.
pub fn format_statement(statement: &ModuleStatement, config: FormatConfig) -> String {
    let mut formatter = ModuleFormatter::new(config);
    formatter.format_statement(statement);
    formatter.into_context().into_emitter().output()
}
