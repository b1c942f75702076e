// for_constexpr! macro implementation
//
// Grammar:
//
//     for_constexpr!(level, level, ...; callback)
//
//     level    := range(LOWER, UPPER)
//               | symm_upper(INDEX, UPPER)
//               | symm_lower(INDEX, LOWER)
//               | symm_lower(INDEX, LOWER, OFFSET)
//     callback := |i, j, ..| body        indices bound as `const` items, body called
//                                        once per tuple as a closure
//               | path(args..)           indices appended as `Index<I>` arguments
//               | path                   called with the indices only

use loopforge_core::{validate, Bound, BoundError, MAX_DEPTH};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{parenthesized, Error, Expr, ExprClosure, Ident, Lit, Pat, Token, UnOp};

/// Largest number of callback invocations one expansion may generate.
const MAX_UNROLLED: usize = 4096;

/// Largest number of enclosing-loop values one expansion may walk, so that
/// outer loops over empty inner levels are bounded too.
const MAX_PREFIXES: usize = 4 * MAX_UNROLLED;

struct Level {
    bound: Bound,
    span: Span,
}

enum Callback {
    /// Parameter names (`None` for `_`) and the inlined body.
    Closure { params: Vec<Option<Ident>>, body: Expr },
    /// Callee and the leading arguments.
    Call { func: Expr, args: Vec<Expr> },
}

pub struct ForConstexpr {
    levels: Vec<Level>,
    callback: Callback,
    callback_span: Span,
}

impl Parse for ForConstexpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut levels = Vec::new();
        loop {
            levels.push(input.parse::<Level>()?);
            if input.peek(Token![;]) {
                input.parse::<Token![;]>()?;
                break;
            }
            input.parse::<Token![,]>()?;
        }

        let expr: Expr = input.parse()?;
        let callback_span = expr.span();
        let callback = Callback::from_expr(expr, levels.len())?;
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after the callback"));
        }

        Ok(Self {
            levels,
            callback,
            callback_span,
        })
    }
}

impl Parse for Level {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name: Ident = input.parse()?;
        let content;
        parenthesized!(content in input);
        let args = Punctuated::<Expr, Token![,]>::parse_terminated(&content)?;
        let args: Vec<&Expr> = args.iter().collect();

        let bound = match (name.to_string().as_str(), args.len()) {
            ("range", 2) => Bound::range(usize_arg(args[0])?, usize_arg(args[1])?),
            ("symm_upper", 2) => Bound::symm_upper(usize_arg(args[0])?, usize_arg(args[1])?),
            ("symm_lower", 2) => Bound::symm_lower(usize_arg(args[0])?, usize_arg(args[1])?),
            ("symm_lower", 3) => Bound::symm_lower_offset(
                usize_arg(args[0])?,
                usize_arg(args[1])?,
                isize_arg(args[2])?,
            ),
            ("range", n) | ("symm_upper", n) => {
                return Err(Error::new_spanned(
                    &name,
                    format!("`{}` takes 2 arguments, found {}", name, n),
                ))
            }
            ("symm_lower", n) => {
                return Err(Error::new_spanned(
                    &name,
                    format!("`symm_lower` takes 2 or 3 arguments, found {}", n),
                ))
            }
            _ => {
                return Err(Error::new_spanned(
                    &name,
                    "expected `range`, `symm_upper` or `symm_lower`",
                ))
            }
        };

        Ok(Level {
            bound,
            span: name.span(),
        })
    }
}

fn unwrap_group(expr: &Expr) -> &Expr {
    match expr {
        Expr::Group(group) => unwrap_group(&group.expr),
        Expr::Paren(paren) => unwrap_group(&paren.expr),
        other => other,
    }
}

fn usize_arg(expr: &Expr) -> syn::Result<usize> {
    match unwrap_group(expr) {
        Expr::Lit(lit) => match &lit.lit {
            Lit::Int(int) => int.base10_parse::<usize>(),
            _ => Err(Error::new_spanned(expr, "expected an integer literal")),
        },
        _ => Err(Error::new_spanned(
            expr,
            "loop bounds must be integer literals",
        )),
    }
}

fn isize_arg(expr: &Expr) -> syn::Result<isize> {
    match unwrap_group(expr) {
        Expr::Unary(unary) if matches!(unary.op, UnOp::Neg(_)) => {
            let magnitude = usize_arg(&unary.expr)?;
            isize::try_from(magnitude)
                .map(|m| -m)
                .map_err(|_| Error::new_spanned(expr, "offset out of range"))
        }
        _ => {
            let value = usize_arg(expr)?;
            isize::try_from(value).map_err(|_| Error::new_spanned(expr, "offset out of range"))
        }
    }
}

impl Callback {
    fn from_expr(expr: Expr, depth: usize) -> syn::Result<Self> {
        match expr {
            Expr::Closure(closure) => Self::from_closure(closure, depth),
            Expr::Call(call) => Ok(Callback::Call {
                func: *call.func,
                args: call.args.into_iter().collect(),
            }),
            Expr::Path(path) => Ok(Callback::Call {
                func: Expr::Path(path),
                args: Vec::new(),
            }),
            other => Err(Error::new_spanned(
                other,
                "expected a closure `|i, ..| body`, a call `f(args..)` or a function path",
            )),
        }
    }

    fn from_closure(closure: ExprClosure, depth: usize) -> syn::Result<Self> {
        if closure.inputs.len() != depth {
            return Err(Error::new_spanned(
                &closure.inputs,
                format!(
                    "closure takes {} indices but the nest has {} levels",
                    closure.inputs.len(),
                    depth
                ),
            ));
        }

        let params = closure
            .inputs
            .iter()
            .map(|pat| match pat {
                Pat::Ident(ident)
                    if ident.by_ref.is_none()
                        && ident.mutability.is_none()
                        && ident.subpat.is_none() =>
                {
                    Ok(Some(ident.ident.clone()))
                }
                Pat::Wild(_) => Ok(None),
                other => Err(Error::new_spanned(
                    other,
                    "index parameters are compile-time constants and take a plain name or `_`",
                )),
            })
            .collect::<syn::Result<Vec<_>>>()?;

        Ok(Callback::Closure {
            params,
            body: *closure.body,
        })
    }

    fn invoke(&self, tuple: &[usize]) -> TokenStream {
        match self {
            Callback::Closure { params, body } => {
                let consts = params.iter().zip(tuple).filter_map(|(param, value)| {
                    param.as_ref().map(|name| {
                        quote! {
                            #[allow(non_upper_case_globals, dead_code)]
                            const #name: usize = #value;
                        }
                    })
                });
                quote! {
                    {
                        #(#consts)*
                        #[allow(clippy::redundant_closure_call)]
                        let _ = (|| #body)();
                    }
                }
            }
            Callback::Call { func, args } => {
                let indices = tuple.iter().map(|value| quote! { ::loopforge::Index::<#value> });
                quote! {
                    let _ = #func(#(#args,)* #(#indices),*);
                }
            }
        }
    }
}

pub fn expand(input: ForConstexpr) -> syn::Result<TokenStream> {
    let ForConstexpr {
        levels,
        callback,
        callback_span,
    } = input;
    let bounds: Vec<Bound> = levels.iter().map(|level| level.bound).collect();
    let guard = |err: BoundError| {
        let span = err
            .level()
            .and_then(|level| levels.get(level))
            .map_or_else(Span::call_site, |level| level.span);
        Error::new(span, err.to_string())
    };

    // Reject before generating anything.
    if bounds.len() > MAX_DEPTH {
        return Err(guard(BoundError::TooDeep {
            depth: bounds.len(),
            max: MAX_DEPTH,
        }));
    }
    let mut budget = Budget::default();
    match measure(&bounds, 0, &mut Vec::with_capacity(bounds.len()), &mut budget) {
        Ok(()) => {}
        Err(Rejection::Bound(err)) => return Err(guard(err)),
        Err(Rejection::TooManyTuples) => {
            return Err(Error::new(
                callback_span,
                format!(
                    "nest expands to more than {} callback invocations, which is the most that can be unrolled",
                    MAX_UNROLLED
                ),
            ))
        }
        Err(Rejection::TooManyPrefixes) => {
            return Err(Error::new(
                callback_span,
                format!(
                    "nest walks more than {} values of its enclosing loops, which is the most that can be unrolled",
                    MAX_PREFIXES
                ),
            ))
        }
    }
    validate(&bounds).map_err(guard)?;

    let body = if bounds.len() == 1 {
        expand_flat(bounds[0], &callback)
    } else {
        let mut prefix = Vec::with_capacity(bounds.len());
        expand_level(&bounds, 0, &mut prefix, &callback)
    };

    Ok(quote! {
        {
            #body
        }
    })
}

#[derive(Default)]
struct Budget {
    tuples: usize,
    prefixes: usize,
}

enum Rejection {
    Bound(BoundError),
    TooManyTuples,
    TooManyPrefixes,
}

/// Walks the same tree `expand_level` generates, stopping as soon as either
/// limit is exceeded. Innermost ranges are counted by length, not visited.
fn measure(
    bounds: &[Bound],
    level: usize,
    prefix: &mut Vec<usize>,
    budget: &mut Budget,
) -> Result<(), Rejection> {
    let range = bounds[level]
        .resolve(level, prefix)
        .map_err(Rejection::Bound)?;

    if level + 1 == bounds.len() {
        budget.tuples = budget.tuples.saturating_add(range.len());
        if budget.tuples > MAX_UNROLLED {
            return Err(Rejection::TooManyTuples);
        }
        return Ok(());
    }

    for value in range {
        budget.prefixes += 1;
        if budget.prefixes > MAX_PREFIXES {
            return Err(Rejection::TooManyPrefixes);
        }
        prefix.push(value);
        measure(bounds, level + 1, prefix, budget)?;
        prefix.pop();
    }
    Ok(())
}

fn expand_flat(bound: Bound, callback: &Callback) -> TokenStream {
    let range = bound.resolve(0, &[]).unwrap_or(0..0);
    let calls = range.map(|value| callback.invoke(&[value]));
    quote! { #(#calls)* }
}

fn expand_level(
    bounds: &[Bound],
    level: usize,
    prefix: &mut Vec<usize>,
    callback: &Callback,
) -> TokenStream {
    if level == bounds.len() {
        return callback.invoke(prefix);
    }

    let range = bounds[level].resolve(level, prefix).unwrap_or(0..0);
    let mut out = TokenStream::new();
    for value in range {
        prefix.push(value);
        out.extend(expand_level(bounds, level + 1, prefix, callback));
        prefix.pop();
    }
    out
}
