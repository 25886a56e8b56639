//! Procedural macros for `mathematica-codec` and `mathematica-macros`.
//!
//! Use these macros through their re-exports (`mathematica_codec::Write` and
//! `mathematica_macros::test_traced`) rather than depending on this crate directly.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    ext::IdentExt, parse_macro_input, parse_quote, Attribute, Data, DeriveInput, Field, Fields,
    Ident, Index, ItemFn, Lit, LitStr, Meta, NestedMeta, Visibility,
};

/// Name of the helper attribute accepted by `#[derive(Write)]`.
const ATTRIBUTE: &str = "mathematica";

/// Log levels accepted by [test_traced].
const LEVELS: [&str; 5] = ["TRACE", "DEBUG", "INFO", "WARN", "ERROR"];

/// Rendering rule selected by container attributes.
#[derive(Default)]
struct ContainerOpts {
    render: bool,
    display: bool,
}

/// Per-field options.
#[derive(Default)]
struct FieldOpts {
    rename: Option<LitStr>,
    skip: bool,
}

/// Returns the `#[mathematica(...)]` items of an attribute list.
fn attribute_items(attrs: &[Attribute]) -> syn::Result<Vec<NestedMeta>> {
    let mut items = Vec::new();
    for attr in attrs.iter().filter(|attr| attr.path.is_ident(ATTRIBUTE)) {
        match attr.parse_meta()? {
            Meta::List(list) => items.extend(list.nested),
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "expected `#[mathematica(...)]`",
                ))
            }
        }
    }
    Ok(items)
}

fn parse_container(attrs: &[Attribute]) -> syn::Result<ContainerOpts> {
    let mut opts = ContainerOpts::default();
    for item in attribute_items(attrs)? {
        match &item {
            NestedMeta::Meta(Meta::Path(path)) if path.is_ident("render") => opts.render = true,
            NestedMeta::Meta(Meta::Path(path)) if path.is_ident("display") => opts.display = true,
            _ => {
                return Err(syn::Error::new_spanned(
                    item,
                    "unknown container attribute; expected `render` or `display`",
                ))
            }
        }
    }
    Ok(opts)
}

fn parse_field(field: &Field) -> syn::Result<FieldOpts> {
    let mut opts = FieldOpts::default();
    for item in attribute_items(&field.attrs)? {
        match &item {
            NestedMeta::Meta(Meta::Path(path)) if path.is_ident("skip") => opts.skip = true,
            NestedMeta::Meta(Meta::NameValue(nv)) if nv.path.is_ident("rename") => {
                match &nv.lit {
                    Lit::Str(name) => opts.rename = Some(name.clone()),
                    lit => {
                        return Err(syn::Error::new_spanned(
                            lit,
                            "`rename` expects a string literal",
                        ))
                    }
                }
            }
            _ => {
                return Err(syn::Error::new_spanned(
                    item,
                    "unknown field attribute; expected `rename = \"...\"` or `skip`",
                ))
            }
        }
    }
    Ok(opts)
}

// Only fields visible outside the crate are written.
fn is_written(field: &Field, opts: &FieldOpts) -> bool {
    matches!(field.vis, Visibility::Public(_)) && !opts.skip
}

fn record_body(fields: &syn::FieldsNamed) -> syn::Result<TokenStream2> {
    let mut members = Vec::new();
    for field in &fields.named {
        let opts = parse_field(field)?;
        if !is_written(field, &opts) {
            continue;
        }
        let ident = field.ident.as_ref().expect("named field");
        let name = opts
            .rename
            .unwrap_or_else(|| LitStr::new(&ident.unraw().to_string(), ident.span()));
        members.push(quote! { record.member(#name, &self.#ident)?; });
    }
    Ok(quote! {
        #[allow(unused_mut)]
        let mut record = sink.record()?;
        #( #members )*
        record.end();
        ::core::result::Result::Ok(())
    })
}

fn sequence_body(fields: &syn::FieldsUnnamed) -> syn::Result<TokenStream2> {
    let mut elements = Vec::new();
    for (i, field) in fields.unnamed.iter().enumerate() {
        let opts = parse_field(field)?;
        if opts.rename.is_some() {
            return Err(syn::Error::new_spanned(
                field,
                "`rename` has no effect on tuple struct fields",
            ));
        }
        if !is_written(field, &opts) {
            continue;
        }
        let index = Index::from(i);
        elements.push(quote! { seq.element(&self.#index)?; });
    }
    Ok(quote! {
        #[allow(unused_mut)]
        let mut seq = sink.sequence()?;
        #( #elements )*
        seq.end();
        ::core::result::Result::Ok(())
    })
}

fn expand_write(input: DeriveInput) -> syn::Result<TokenStream2> {
    let container = parse_container(&input.attrs)?;
    let mut generics = input.generics;

    // A custom rendering takes precedence over stringification, which takes precedence over
    // the value's shape.
    let body = if container.render {
        quote! { ::mathematica_codec::write_rendered(sink, self) }
    } else if container.display {
        quote! { ::mathematica_codec::write_display(sink, self) }
    } else {
        let body = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => record_body(fields)?,
                Fields::Unnamed(fields) => sequence_body(fields)?,
                Fields::Unit => quote! {
                    sink.record()?.end();
                    ::core::result::Result::Ok(())
                },
            },
            Data::Enum(_) | Data::Union(_) => {
                return Err(syn::Error::new(
                    Span::call_site(),
                    "`Write` can only be derived for structs unless `#[mathematica(render)]` or `#[mathematica(display)]` is set",
                ))
            }
        };
        for param in generics.type_params_mut() {
            param.bounds.push(parse_quote!(::mathematica_codec::Write));
        }
        body
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics ::mathematica_codec::Write for #name #ty_generics #where_clause {
            fn write(
                &self,
                sink: &mut ::mathematica_codec::Sink,
            ) -> ::core::result::Result<(), ::mathematica_codec::Error> {
                #body
            }
        }
    })
}

/// Derives `mathematica_codec::Write`.
///
/// See the re-export in `mathematica_codec` for the supported attributes.
#[proc_macro_derive(Write, attributes(mathematica))]
pub fn derive_write(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_write(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Run a test function with a tracing subscriber that captures logs at the given level
/// (`DEBUG` if none is provided).
///
/// # Example
///
/// ```rust,ignore
/// use mathematica_macros::test_traced;
/// use tracing::info;
///
/// #[test_traced("INFO")]
/// fn test_marshal() {
///     info!("this is printed");
/// }
/// ```
#[proc_macro_attribute]
pub fn test_traced(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    let level = if attr.is_empty() {
        LitStr::new("DEBUG", Span::call_site())
    } else {
        parse_macro_input!(attr as LitStr)
    };
    let level_str = level.value().to_uppercase();
    if !LEVELS.contains(&level_str.as_str()) {
        return syn::Error::new(
            level.span(),
            "invalid log level; expected one of TRACE, DEBUG, INFO, WARN, ERROR",
        )
        .to_compile_error()
        .into();
    }
    let level = Ident::new(&level_str, level.span());

    let attrs = &input.attrs;
    let vis = &input.vis;
    let name = &input.sig.ident;
    let output = &input.sig.output;
    let block = &input.block;
    let expanded = quote! {
        #[test]
        #(#attrs)*
        #vis fn #name() #output {
            let subscriber = ::mathematica_macros::tracing_subscriber::fmt()
                .with_test_writer()
                .with_max_level(::mathematica_macros::tracing::Level::#level)
                .with_line_number(true)
                .finish();
            let dispatcher = ::mathematica_macros::tracing::Dispatch::new(subscriber);
            ::mathematica_macros::tracing::dispatcher::with_default(&dispatcher, || #block)
        }
    };
    TokenStream::from(expanded)
}
