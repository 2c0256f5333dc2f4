//! Parses the arguments of a check macro.

use syn::{parse::ParseStream, Expr, Token, Type};

use super::kind::{CheckKind, Operand};

/// The operand following the subject.
pub(crate) enum OperandInput {
    /// A value the subject is compared to.
    Value(Expr),
    /// A type the subject is compared to.
    Type(Type),
}

/// The arguments of a check macro.
pub(crate) struct CheckInput {
    /// The expression that is checked.
    pub(crate) subject: Expr,
    /// The operand of the check, if it takes one.
    pub(crate) operand: Option<OperandInput>,
    /// The label naming the subject, if one was given.
    pub(crate) label: Option<Expr>,
}

impl CheckInput {
    /// Parses the arguments of a check of the given kind.
    ///
    /// The grammar is `subject (, operand)? (, label)? ,?`, where the operand is required for
    /// checks taking one and the label is only accepted by checks that allow labels.
    pub(crate) fn parse_for(kind: CheckKind, input: ParseStream) -> syn::Result<Self> {
        let subject = input.parse()?;

        let operand = match kind.operand() {
            Operand::None => None,
            Operand::Value => {
                input.parse::<Token![,]>()?;
                Some(OperandInput::Value(input.parse()?))
            }
            Operand::Type => {
                input.parse::<Token![,]>()?;
                Some(OperandInput::Type(input.parse()?))
            }
        };

        let mut label = None;

        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;

            if !input.is_empty() {
                if !kind.accepts_label() {
                    return Err(input.error(format!(
                        "`{}` does not accept a label, the subject must be named",
                        kind
                    )));
                }

                label = Some(input.parse()?);

                if input.peek(Token![,]) {
                    input.parse::<Token![,]>()?;
                }
            }
        }

        if !input.is_empty() {
            return Err(input.error(format!("unexpected argument to `{}`", kind)));
        }

        Ok(CheckInput {
            subject,
            operand,
            label,
        })
    }
}
