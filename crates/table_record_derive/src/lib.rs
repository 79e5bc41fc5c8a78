use proc_macro::TokenStream;
use quote::quote;
use std::collections::HashSet;
use syn::{
    Expr, ExprLit, Fields, Ident, ItemStruct, Lit, Meta, Path, Token, parse_macro_input, parse_str,
    punctuated::Punctuated,
};

struct TableRecordConfig {
    traits_path: Path,
    entity_ident: Ident,
    id_field: Ident,
    created_at_field: Ident,
    updated_at_field: Option<Ident>,
}

impl Default for TableRecordConfig {
    fn default() -> Self {
        Self {
            traits_path: parse_str("crate::db::dao::base_traits")
                .expect("default traits path should parse"),
            entity_ident: Ident::new("Entity", proc_macro2::Span::call_site()),
            id_field: Ident::new("id", proc_macro2::Span::call_site()),
            created_at_field: Ident::new("created_at", proc_macro2::Span::call_site()),
            updated_at_field: None,
        }
    }
}

/// Adds the uuid primary key and `created_at` column every table of the
/// external schema carries, plus `updated_at` when requested with
/// `#[table_record(updated_at)]` or `#[table_record(updated_at = "name")]`.
///
/// Columns already declared on the struct are left untouched, so a table can
/// keep a nullable `updated_at` of its own. The entity also gets a
/// `TableRecord` impl naming the column that updates should refresh.
#[proc_macro_attribute]
pub fn table_record(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr with Punctuated<Meta, Token![,]>::parse_terminated);
    let mut config = TableRecordConfig::default();
    if let Err(err) = apply_args(&mut config, args) {
        return err.to_compile_error().into();
    }

    let mut input = parse_macro_input!(item as ItemStruct);
    let fields = match &mut input.fields {
        Fields::Named(fields) => fields,
        _ => {
            return syn::Error::new_spanned(
                input,
                "table_record requires a struct with named fields",
            )
            .to_compile_error()
            .into();
        }
    };

    let existing: HashSet<String> = fields
        .named
        .iter()
        .filter_map(|field| field.ident.as_ref().map(|ident| ident.to_string()))
        .collect();

    let mut new_fields = Punctuated::new();

    if !existing.contains(&config.id_field.to_string()) {
        let id_ident = config.id_field.clone();
        let id_field: syn::Field = syn::parse_quote! {
            #[sea_orm(primary_key, auto_increment = false)]
            pub #id_ident: uuid::Uuid
        };
        new_fields.push(id_field);
    }

    for field in fields.named.iter().cloned() {
        new_fields.push(field);
    }

    if !existing.contains(&config.created_at_field.to_string()) {
        let created_ident = config.created_at_field.clone();
        let created_field: syn::Field = syn::parse_quote! {
            #[sea_orm(default_expr = "Expr::current_timestamp()")]
            pub #created_ident: sea_orm::entity::prelude::DateTimeWithTimeZone
        };
        new_fields.push(created_field);
    }

    if let Some(updated_ident) = config.updated_at_field.as_ref()
        && !existing.contains(&updated_ident.to_string())
    {
        let updated_field: syn::Field = syn::parse_quote! {
            #[sea_orm(default_expr = "Expr::current_timestamp()")]
            pub #updated_ident: sea_orm::entity::prelude::DateTimeWithTimeZone
        };
        new_fields.push(updated_field);
    }

    fields.named = new_fields;

    let traits_path = config.traits_path;
    let entity = config.entity_ident;

    let updated_at_column = match config.updated_at_field {
        Some(updated_at_field) => {
            let variant = column_variant(&updated_at_field);
            quote! { Some(Column::#variant) }
        }
        None => quote! { None },
    };

    let expanded = quote! {
        #input

        impl #traits_path::TableRecord for #entity {
            fn updated_at_column() -> Option<Self::Column> {
                #updated_at_column
            }
        }
    };

    expanded.into()
}

/// `updated_at` -> `UpdatedAt`, matching the variant sea-orm derives for a field.
fn column_variant(field: &Ident) -> Ident {
    let camel: String = field
        .to_string()
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();
    Ident::new(&camel, field.span())
}

fn apply_args(
    config: &mut TableRecordConfig,
    args: Punctuated<Meta, Token![,]>,
) -> Result<(), syn::Error> {
    for meta in args {
        let name_value = match meta {
            Meta::Path(path) if path.is_ident("updated_at") => {
                config.updated_at_field =
                    Some(Ident::new("updated_at", proc_macro2::Span::call_site()));
                continue;
            }
            Meta::NameValue(name_value) => name_value,
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "expected `updated_at` or a name-value pair, e.g. traits = \"path::to::traits\"",
                ));
            }
        };

        let Some(ident) = name_value.path.get_ident() else {
            return Err(syn::Error::new_spanned(
                name_value.path,
                "expected simple identifier for attribute key",
            ));
        };

        let value = match name_value.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(lit_str),
                ..
            }) => lit_str,
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "expected string literal for attribute value",
                ));
            }
        };

        match ident.to_string().as_str() {
            "traits" => {
                config.traits_path = value.parse::<Path>().map_err(|err| {
                    syn::Error::new(value.span(), format!("invalid traits path: {err}"))
                })?;
            }
            "entity" => {
                config.entity_ident = Ident::new(&value.value(), value.span());
            }
            "id" => {
                config.id_field = Ident::new(&value.value(), value.span());
            }
            "created_at" => {
                config.created_at_field = Ident::new(&value.value(), value.span());
            }
            "updated_at" => {
                config.updated_at_field = Some(Ident::new(&value.value(), value.span()));
            }
            _ => {
                return Err(syn::Error::new_spanned(
                    ident,
                    "unknown table_record attribute key",
                ));
            }
        }
    }

    Ok(())
}
