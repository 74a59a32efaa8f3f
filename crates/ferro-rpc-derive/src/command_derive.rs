use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Result, Type, Visibility};

pub fn expand(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;

    let method = extract_method(&input)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "CommandSchema requires a struct with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "CommandSchema can only be derived for plain structs",
            ))
        }
    };

    let mut specs = Vec::with_capacity(fields.len());
    let mut seen_optional = false;
    let last_index = fields.len().saturating_sub(1);

    for (index, field) in fields.iter().enumerate() {
        let ident = field.ident.as_ref().expect("named field");
        if !matches!(field.vis, Visibility::Public(_)) {
            return Err(syn::Error::new_spanned(
                ident,
                format!("field `{ident}` is not public; command records expose every field"),
            ));
        }

        let meta = FieldMeta::extract(&field.attrs)?;
        if meta.variadic && index != last_index {
            return Err(syn::Error::new_spanned(
                ident,
                "variadic is only permitted on the final field",
            ));
        }

        let (optional, inner_ty) = split_optional(&field.ty);
        if optional {
            seen_optional = true;
        } else if seen_optional && !meta.variadic {
            return Err(syn::Error::new_spanned(
                ident,
                format!("required field `{ident}` follows an optional field"),
            ));
        }
        if meta.default.is_some() && !optional {
            return Err(syn::Error::new_spanned(
                ident,
                format!("required field `{ident}` cannot carry a default"),
            ));
        }

        let kind = match &meta.kind_override {
            Some(kind_name) => kind_from_name(kind_name)
                .ok_or_else(|| syn::Error::new_spanned(ident, "unknown kind override"))?,
            None => kind_for_type(inner_ty)?,
        };

        let name_lit = ident.to_string();
        let default = match &meta.default {
            Some(expr) => quote! { ::core::option::Option::Some(::serde_json::json!(#expr)) },
            None => quote! { ::core::option::Option::None },
        };
        let variadic = meta.variadic;

        specs.push(quote! {
            ::ferro_rpc_commands::schema::ParamSpec {
                name: #name_lit,
                kind: #kind,
                optional: #optional,
                default: #default,
                variadic: #variadic,
            }
        });
    }

    Ok(quote! {
        impl ::ferro_rpc_commands::schema::CommandSchema for #name {
            const METHOD: &'static str = #method;

            fn param_specs() -> ::std::vec::Vec<::ferro_rpc_commands::schema::ParamSpec> {
                ::std::vec![#(#specs),*]
            }
        }
    })
}

fn extract_method(input: &DeriveInput) -> Result<String> {
    let mut method = None;
    for attr in &input.attrs {
        if attr.path().is_ident("command") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("method") {
                    let value = meta.value()?;
                    let s: syn::LitStr = value.parse()?;
                    method = Some(s.value());
                    Ok(())
                } else {
                    Err(meta.error("unknown command attribute"))
                }
            })?;
        }
    }
    method.ok_or_else(|| {
        syn::Error::new_spanned(&input.ident, "missing #[command(method = \"...\")] attribute")
    })
}

struct FieldMeta {
    default: Option<syn::Expr>,
    variadic: bool,
    kind_override: Option<String>,
}

impl FieldMeta {
    fn extract(attrs: &[syn::Attribute]) -> Result<FieldMeta> {
        let mut meta = FieldMeta {
            default: None,
            variadic: false,
            kind_override: None,
        };
        for attr in attrs {
            if attr.path().is_ident("command") {
                attr.parse_nested_meta(|nested| {
                    if nested.path.is_ident("default") {
                        let value = nested.value()?;
                        meta.default = Some(value.parse()?);
                    } else if nested.path.is_ident("variadic") {
                        meta.variadic = true;
                    } else if nested.path.is_ident("kind") {
                        let value = nested.value()?;
                        let s: syn::LitStr = value.parse()?;
                        meta.kind_override = Some(s.value());
                    } else {
                        return Err(nested.error("unknown command attribute"));
                    }
                    Ok(())
                })?;
            }
        }
        Ok(meta)
    }
}

/// Peels `Option<T>`, returning whether the field is optional and the
/// type that determines its parameter kind.
fn split_optional(ty: &Type) -> (bool, &Type) {
    if let Type::Path(type_path) = ty {
        if let Some(segment) = type_path.path.segments.last() {
            if segment.ident == "Option" {
                if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                    if let Some(syn::GenericArgument::Type(inner)) = args.args.first() {
                        return (true, inner);
                    }
                }
            }
        }
    }
    (false, ty)
}

fn kind_from_name(name: &str) -> Option<TokenStream> {
    let kind = match name {
        "bool" => quote! { ::ferro_rpc_commands::schema::ParamKind::Bool },
        "int32" => quote! { ::ferro_rpc_commands::schema::ParamKind::Int32 },
        "int64" => quote! { ::ferro_rpc_commands::schema::ParamKind::Int64 },
        "uint32" => quote! { ::ferro_rpc_commands::schema::ParamKind::Uint32 },
        "uint64" => quote! { ::ferro_rpc_commands::schema::ParamKind::Uint64 },
        "float" => quote! { ::ferro_rpc_commands::schema::ParamKind::Float },
        "string" => quote! { ::ferro_rpc_commands::schema::ParamKind::String },
        "object" => quote! { ::ferro_rpc_commands::schema::ParamKind::Object },
        _ => return None,
    };
    Some(kind)
}

fn kind_for_type(ty: &Type) -> Result<TokenStream> {
    let Type::Path(type_path) = ty else {
        return Err(syn::Error::new_spanned(
            ty,
            "unsupported field type for an RPC command parameter",
        ));
    };
    let Some(segment) = type_path.path.segments.last() else {
        return Err(syn::Error::new_spanned(ty, "unsupported field type"));
    };

    let kind = match segment.ident.to_string().as_str() {
        "bool" => quote! { ::ferro_rpc_commands::schema::ParamKind::Bool },
        "i8" | "i16" | "i32" => quote! { ::ferro_rpc_commands::schema::ParamKind::Int32 },
        "i64" | "isize" => quote! { ::ferro_rpc_commands::schema::ParamKind::Int64 },
        "u8" | "u16" | "u32" => quote! { ::ferro_rpc_commands::schema::ParamKind::Uint32 },
        "u64" | "usize" => quote! { ::ferro_rpc_commands::schema::ParamKind::Uint64 },
        "f32" | "f64" => quote! { ::ferro_rpc_commands::schema::ParamKind::Float },
        "String" => quote! { ::ferro_rpc_commands::schema::ParamKind::String },
        "Vec" => {
            let inner = generic_arg(segment, 0)
                .ok_or_else(|| syn::Error::new_spanned(ty, "Vec requires an element type"))?;
            let inner_kind = kind_for_type(inner)?;
            quote! {
                ::ferro_rpc_commands::schema::ParamKind::Array(::std::boxed::Box::new(#inner_kind))
            }
        }
        "HashMap" | "BTreeMap" => {
            let value = generic_arg(segment, 1)
                .ok_or_else(|| syn::Error::new_spanned(ty, "map requires a value type"))?;
            let value_kind = kind_for_type(value)?;
            quote! {
                ::ferro_rpc_commands::schema::ParamKind::Map(::std::boxed::Box::new(#value_kind))
            }
        }
        // Any other named type is a nested record, validated structurally
        // during assignment.
        _ => quote! { ::ferro_rpc_commands::schema::ParamKind::Object },
    };
    Ok(kind)
}

fn generic_arg(segment: &syn::PathSegment, index: usize) -> Option<&Type> {
    if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
        args.args.iter().nth(index).and_then(|arg| match arg {
            syn::GenericArgument::Type(ty) => Some(ty),
            _ => None,
        })
    } else {
        None
    }
}
