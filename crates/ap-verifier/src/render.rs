// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Prints a [`Program`] as PuyaPy source.

use ap_types::encoding::SCALAR_WIDTH;

use crate::ir::{Cond, Expr, Program, Stmt};
use crate::OutputKind;

struct Writer {
    out: String,
    indent: usize,
}

impl Writer {
    fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.indent {
                self.out.push_str("    ");
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }
}

struct Printer<'a> {
    group: String,
    program: &'a Program,
    kind: OutputKind,
}

fn is_atomic(e: &Expr) -> bool {
    !matches!(
        e,
        Expr::Add(..) | Expr::Sub(..) | Expr::Mul(..) | Expr::Neg(..) | Expr::Concat(..)
    )
}

impl Printer<'_> {
    fn operand(&self, e: &Expr) -> String {
        let s = self.expr(e);
        if is_atomic(e) {
            s
        } else {
            format!("({s})")
        }
    }

    fn scalar_bytes(&self, e: &Expr) -> String {
        format!("{}.bytes", self.operand(e))
    }

    fn expr(&self, e: &Expr) -> String {
        let g = &self.group;
        match e {
            Expr::Var(name) => name.clone(),
            Expr::Int(x) => format!("BigUInt({x})"),
            Expr::Hex(b) => format!("Bytes.from_hex(\"{}\")", hex::encode(b)),
            Expr::Label(s) => format!("Bytes(b\"{s}\")"),
            Expr::ScalarModulus => "q".to_string(),
            Expr::ProofSlice(r) => format!("proof_bytes[{}:{}]", r.start, r.end),
            Expr::PublicInputs => "public_inputs_bytes".to_string(),

            Expr::FromBytes(a) => format!("BigUInt.from_bytes({})", self.expr(a)),
            Expr::Word(a) => format!("(bzero({SCALAR_WIDTH}) | {})", self.scalar_bytes(a)),

            Expr::Add(a, b) => format!("({} + {}) % q", self.operand(a), self.operand(b)),
            Expr::Sub(a, b) => format!("({} + q - {}) % q", self.operand(a), self.operand(b)),
            Expr::Mul(a, b) => format!("({} * {}) % q", self.operand(a), self.operand(b)),
            Expr::Neg(a) => format!("(q - {}) % q", self.operand(a)),
            Expr::Pow(b, e) => format!("expmod({}, {}, q)", self.expr(b), self.expr(e)),
            Expr::Inverse(a) => format!("expmod({}, q - BigUInt(2), q)", self.expr(a)),
            Expr::Reduce(a) => format!("curvemod({})", self.expr(a)),

            Expr::Concat(parts) => parts.iter().map(|p| self.operand(p)).collect::<Vec<_>>().join(" + "),
            Expr::Sha256(a) => format!("sha256({})", self.expr(a)),
            Expr::Fs(a) => format!("fs({})", self.expr(a)),

            Expr::EcAdd(a, b) => format!("ec.add(EC.{g}, {}, {})", self.expr(a), self.expr(b)),
            Expr::EcMul(p, s) => format!("ec.scalar_mul(EC.{g}, {}, {})", self.expr(p), self.scalar_bytes(s)),
            Expr::EcNeg(p) => format!("invert({})", self.expr(p)),
            Expr::PairingCheck(a, b) => {
                format!("ec.pairing_check(EC.{g}, {}, {})", self.expr(a), self.expr(b))
            }
        }
    }

    fn reject(&self) -> &'static str {
        match self.kind {
            OutputKind::LogicSig => "return False",
            OutputKind::SmartContract => "return arc4.Bool(False)",
        }
    }

    fn stmt(&self, w: &mut Writer, stmt: &Stmt) {
        match stmt {
            Stmt::Section(title) => {
                w.blank();
                w.line(format!("### {title} ###"));
            }
            Stmt::Comment(text) => w.line(format!("# {text}")),
            Stmt::Let(name, e) => w.line(format!("{name} = {}", self.expr(e))),
            Stmt::CheckLengths => {
                w.line(format!("assert proof_bytes.length == {}", self.program.proof_len()));
                w.line(format!("assert public_inputs_bytes.length == VK_NB_PUBLIC_INPUTS * {SCALAR_WIDTH}"));
            }
            Stmt::RejectIf { any, .. } => {
                let conds: Vec<String> = any
                    .iter()
                    .map(|c| {
                        let op = match c.cond {
                            Cond::Ge => ">=",
                            Cond::Ne => "!=",
                        };
                        format!("{} {op} {}", self.operand(&c.lhs), self.operand(&c.rhs))
                    })
                    .collect();
                match conds.as_slice() {
                    [] => return,
                    [only] => w.line(format!("if {only}:")),
                    [first, rest @ ..] => {
                        w.line(format!("if ({first}"));
                        for c in rest {
                            w.line(format!("        or {c}"));
                        }
                        w.line("):");
                    }
                }
                w.indent += 1;
                w.line(self.reject());
                w.indent -= 1;
            }
            Stmt::RejectNonCanonicalPublicInputs => {
                w.line("for i in urange(VK_NB_PUBLIC_INPUTS):");
                w.indent += 1;
                w.line(format!(
                    "if BigUInt.from_bytes(public_inputs_bytes[i * {SCALAR_WIDTH}:(i + 1) * {SCALAR_WIDTH}]) >= q:"
                ));
                w.indent += 1;
                w.line(self.reject());
                w.indent -= 2;
            }
            Stmt::InterpolatePublicInputs { dst, zeta, zn, omega } => self.interpolation(w, dst, zeta, zn, omega),
            Stmt::Accept(e) => match self.kind {
                OutputKind::LogicSig => w.line(format!("return {}", self.expr(e))),
                OutputKind::SmartContract => w.line(format!("return arc4.Bool({})", self.expr(e))),
            },
        }
    }

    /// Lagrange interpolation of the public inputs with one inversion.
    fn interpolation(&self, w: &mut Writer, dst: &str, zeta: &str, zn: &str, omega: &str) {
        let width = SCALAR_WIDTH;
        w.line("# L_i(zeta) = omega^i * zn / (zeta - omega^i), inverted in one batch");
        w.line(format!("{dst} = BigUInt(0)"));
        w.line("pi_ws = DynamicArray[UInt256]()");
        w.line("pi_dens = DynamicArray[UInt256]()");
        w.line("pi_prefix = DynamicArray[UInt256]()");
        w.line("pi_w = BigUInt(1)");
        w.line("pi_acc = BigUInt(1)");
        w.line("for i in urange(VK_NB_PUBLIC_INPUTS):");
        w.indent += 1;
        w.line(format!("pi_d = ({zeta} + q - pi_w) % q"));
        w.line("pi_acc = (pi_acc * pi_d) % q");
        w.line("pi_ws.append(UInt256(pi_w))");
        w.line("pi_dens.append(UInt256(pi_d))");
        w.line("pi_prefix.append(UInt256(pi_acc))");
        w.line(format!("pi_w = (pi_w * {omega}) % q"));
        w.indent -= 1;
        w.line("pi_inv = expmod(pi_acc, q - BigUInt(2), q)");
        w.line("i = VK_NB_PUBLIC_INPUTS");
        w.line("while i > 0:");
        w.indent += 1;
        w.line("i -= 1");
        w.line("pi_inv_i = pi_inv");
        w.line("if i > 0:");
        w.indent += 1;
        w.line("pi_inv_i = (pi_inv * pi_prefix[i - 1].native) % q");
        w.indent -= 1;
        w.line("pi_inv = (pi_inv * pi_dens[i].native) % q");
        w.line(format!("pi_x = BigUInt.from_bytes(public_inputs_bytes[i * {width}:(i + 1) * {width}])"));
        w.line(format!("pi_l = (((pi_ws[i].native * {zn}) % q) * pi_inv_i) % q"));
        w.line(format!("{dst} = ({dst} + (pi_l * pi_x) % q) % q"));
        w.indent -= 1;
    }
}

fn subroutines(w: &mut Writer, program: &Program) {
    let params = program.curve.parameters();
    let cw = params.coordinate_width;
    let lines: Vec<String> = vec![
        "@subroutine".into(),
        "def expmod(base: BigUInt, exponent: BigUInt, modulus: BigUInt) -> BigUInt:".into(),
        "    result = BigUInt(1)".into(),
        "    while exponent > 0:".into(),
        "        if exponent % 2 == 1:".into(),
        "            result = (result * base) % modulus".into(),
        "        exponent = exponent // 2".into(),
        "        base = (base * base) % modulus".into(),
        "    return result".into(),
        String::new(),
        String::new(),
        "@subroutine".into(),
        "def curvemod(x: Bytes) -> BigUInt:".into(),
        "    return BigUInt.from_bytes(x) % BigUInt(R_MOD)".into(),
        String::new(),
        String::new(),
        "@subroutine".into(),
        "def invert(p: Bytes) -> Bytes:".into(),
        format!("    y = BigUInt.from_bytes(p[{cw}:])"),
        format!("    return p[:{cw}] + (bzero({cw}) | ((BigUInt(P_MOD) - y) % BigUInt(P_MOD)).bytes)"),
    ];
    for l in lines {
        w.line(l);
    }
    if params.infinity_flag.is_some() {
        w.blank();
        w.blank();
        w.line("@subroutine");
        w.line("def fs(p: Bytes) -> Bytes:");
        w.line(format!("    if p == bzero({}):", params.g1_width()));
        w.line("        return setbit_bytes(p, 0, 1)");
        w.line("    return p");
    }
}

/// Renders `program` as a logicsig or an ARC4 contract named `name`.
pub fn render(program: &Program, kind: OutputKind, name: &str) -> String {
    let params = program.curve.parameters();
    let printer = Printer { group: params.vm_group.to_string(), program, kind };
    let mut w = Writer { out: String::new(), indent: 0 };

    w.line("# Code automatically generated - DO NOT EDIT.");
    w.line(format!(
        "# PLONK verifier ({}, {}) for circuits with {} public inputs.",
        program.curve, program.variant, program.nb_public_inputs
    ));
    w.blank();
    match kind {
        OutputKind::LogicSig => {
            w.line("from algopy import BigUInt, Bytes, Txn, UInt64, logicsig, subroutine, urange");
        }
        OutputKind::SmartContract => {
            w.line("import typing");
            w.blank();
            w.line("from algopy import ARC4Contract, BigUInt, Bytes, Global, Txn, UInt64, arc4, subroutine, urange");
        }
    }
    w.line("from algopy.arc4 import DynamicArray, UInt256");
    w.line("from algopy.op import EC, EllipticCurve as ec, bzero, setbit_bytes, sha256");
    w.blank();
    if kind == OutputKind::SmartContract {
        w.line("Bytes32: typing.TypeAlias = arc4.StaticArray[arc4.Byte, typing.Literal[32]]");
        w.blank();
    }
    w.line("# scalar field order");
    w.line(format!("R_MOD = {}", params.scalar_modulus));
    w.line("# base field order");
    w.line(format!("P_MOD = {}", params.base_modulus));
    w.blank();
    w.blank();

    match kind {
        OutputKind::LogicSig => {
            w.line(format!("@logicsig(name=\"{name}\")"));
            w.line("def verify() -> bool:");
            w.indent = 1;
            w.line("# Arguments are ARC4 byte[32][] values; drop the u16 length prefix.");
            w.line("proof_bytes = Txn.application_args(1)[2:]");
            w.line("public_inputs_bytes = Txn.application_args(2)[2:]");
        }
        OutputKind::SmartContract => {
            w.line(format!("class {name}(ARC4Contract):"));
            w.indent = 1;
            w.line("@arc4.abimethod(create=\"require\")");
            w.line("def create(self, name: arc4.String) -> None:");
            w.line("    self.app_name = name");
            w.line("    self.immutable = False");
            w.blank();
            w.line("@arc4.abimethod(allow_actions=[\"UpdateApplication\", \"DeleteApplication\"])");
            w.line("def update(self) -> None:");
            w.line("    assert not self.immutable");
            w.line("    assert Global.creator_address == Txn.sender");
            w.blank();
            w.line("@arc4.abimethod");
            w.line("def make_immutable(self) -> None:");
            w.line("    assert Global.creator_address == Txn.sender");
            w.line("    self.immutable = True");
            w.blank();
            w.line("@arc4.abimethod");
            w.line("def verify(");
            w.line("    self, proof: DynamicArray[Bytes32], public_inputs: DynamicArray[Bytes32]");
            w.line(") -> arc4.Bool:");
            w.indent = 2;
            w.line("proof_bytes = proof.bytes[2:]");
            w.line("public_inputs_bytes = public_inputs.bytes[2:]");
        }
    }
    w.line("q = BigUInt(R_MOD)");
    w.line(format!("VK_NB_PUBLIC_INPUTS = UInt64({})", program.nb_public_inputs));
    for stmt in &program.body {
        printer.stmt(&mut w, stmt);
    }

    w.indent = 0;
    w.blank();
    w.blank();
    subroutines(&mut w, program);
    w.out
}
