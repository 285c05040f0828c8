//! Generates Verilog code.

use std::collections::HashSet;
use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use itertools::iproduct;

use crate::encode::{DATA_WIDTH, SYMBOL_WIDTH};
use crate::vir::*;
use crate::*;

impl Package {
    fn gen_vir_module<P: AsRef<Path>>(&self, module: &Module, path_dir: P) -> Result<(), PackageError> {
        let path = path_dir.as_ref().join(format!("{}.v", module.name));
        let mut file = File::create(&path).map_err(|error| PackageError::Fs { error })?;

        writeln!(file, "{}", module).map_err(|error| PackageError::Fs { error })?;
        tracing::info!("wrote module {} to {}", module.name, path.display());

        Ok(())
    }

    /// Generates Verilog code at the given directory path.
    pub fn gen_vir<P: AsRef<Path>>(&self, path_dir: P) -> Result<(), PackageError> {
        let mut names = HashSet::new();
        for module in self.modules.iter() {
            if !names.insert(module.name.as_str()) {
                return Err(PackageError::Duplicate { name: module.name.clone() });
            }
        }

        fs::create_dir_all(path_dir.as_ref()).map_err(|error| PackageError::Fs { error })?;

        for module in self.modules.iter() {
            self.gen_vir_module(module, &path_dir)?;
        }

        Ok(())
    }
}

fn assign(lvalue: &str, expr: Expression) -> Statement { Statement::blocking_assignment(lvalue.into(), expr) }

/// Decoder module: `in` is looked up in `table`, unknown symbols set `error`.
pub fn decoder_module(name: &str, table: &Table) -> Module {
    let case_items = table
        .iter()
        .map(|entry| {
            (
                Expression::Number(entry.symbol.to_literal()),
                vec![
                    assign("out", Expression::number(DATA_WIDTH, entry.byte.into())),
                    assign("error", Expression::number(1, 0)),
                ],
            )
        })
        .collect::<Vec<_>>();
    let default = vec![assign("out", Expression::number(DATA_WIDTH, 0)), assign("error", Expression::number(1, 1))];

    Module {
        name: name.to_string(),
        port_decls: vec![
            PortDeclaration::input(SYMBOL_WIDTH as usize, "in"),
            PortDeclaration::output_reg(DATA_WIDTH as usize, "out"),
            PortDeclaration::output_reg(1, "error"),
        ],
        module_items: vec![ModuleItem::Commented(
            format!("TMDS decoder: {} data symbols", table.len()),
            None,
            vec![ModuleItem::AlwaysConstruct(
                "always @*".to_string(),
                vec![Statement::Case("in".into(), case_items, default)],
            )],
        )],
    }
}

/// Encoder module: `out` is the symbol of `in` under `bias`, where `bias = 1` favors fewer ones.
pub fn encoder_module(name: &str) -> Module {
    let case_items = iproduct!(BiasHint::ALL, 0..=u8::MAX)
        .map(|(bias, byte)| {
            let (_, symbol) = encode(byte, bias);
            let selector = Expression::number(DATA_WIDTH + 1, (bias.as_bit() << DATA_WIDTH) | u32::from(byte));
            (selector, vec![assign("out", Expression::Number(symbol.to_literal()))])
        })
        .collect::<Vec<_>>();

    Module {
        name: name.to_string(),
        port_decls: vec![
            PortDeclaration::input(DATA_WIDTH as usize, "in"),
            PortDeclaration::input(1, "bias"),
            PortDeclaration::output_reg(SYMBOL_WIDTH as usize, "out"),
        ],
        module_items: vec![ModuleItem::AlwaysConstruct(
            "always @*".to_string(),
            vec![Statement::Case(Expression::ident("bias").concat("in".into()), case_items, vec![])],
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::build_table;

    #[test]
    fn decoder_has_one_item_per_entry() {
        let table = build_table().unwrap();
        let module = decoder_module("tmds_decoder", &table);
        let code = module.to_string();

        assert!(code.contains("module tmds_decoder\n"));
        assert!(code.contains("    input wire [10-1:0] in,\n    output reg [8-1:0] out,\n    output reg error\n"));
        assert_eq!(code.matches(": begin").count(), table.len() + 1);
        assert!(code.contains(
            "10'b1111111111: begin\n            out = 8'b00000000;\n            error = 1'b0;\n        end\n"
        ));
        assert!(code.contains("default: begin\n            out = 8'b00000000;\n            error = 1'b1;\n        end\n"));
    }

    #[test]
    fn encoder_covers_every_selector() {
        let code = encoder_module("tmds_encoder").to_string();

        assert!(code.contains("case ({bias, in})"));
        assert_eq!(code.matches(": begin").count(), 512);
        assert!(!code.contains("default"));
        assert!(code.contains("9'b100000000: begin\n            out = 10'b0100000000;\n        end"));
        assert!(code.contains("9'b011111111: begin\n            out = 10'b0011111111;\n        end"));
    }
}
