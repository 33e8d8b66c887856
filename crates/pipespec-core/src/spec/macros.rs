//! Macro para declarar specs de componentes tipados.
//!
//! ```ignore
//! component_spec! {
//!     pub struct TrainerSpec {
//!         parameters: {
//!             "num_steps" => ParameterSpec::int(),
//!             "module_file" => ParameterSpec::string().optional(),
//!         },
//!         inputs: { "examples" => ChannelSpec::new("Examples") },
//!         outputs: { "model" => ChannelSpec::new("Model") },
//!         output_aliases: { "output" => "model" },
//!     }
//! }
//!
//! let spec = TrainerSpec::new(args)?;
//! ```
//!
//! Omitir `parameters`, `inputs` u `outputs` produce un descriptor abstracto:
//! compila, pero `descriptor()` (y por tanto `new`) devuelve
//! `DefinitionError::MissingSection`. Para una sección vacía usar `{}`.

#[macro_export]
macro_rules! component_spec {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(parameters: $params:tt $(,)?)?
            $(inputs: $inputs:tt $(,)?)?
            $(outputs: $outputs:tt $(,)?)?
            $(input_aliases: $in_aliases:tt $(,)?)?
            $(output_aliases: $out_aliases:tt $(,)?)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name($crate::spec::SpecInstance);

        impl $name {
            /// Declaración sin validar del descriptor.
            #[allow(unused_mut)]
            pub fn declaration() -> $crate::spec::DescriptorBuilder {
                let mut builder = $crate::spec::Descriptor::builder(stringify!($name));
                $( builder = $crate::__spec_section!(builder, Parameters, $params); )?
                $( builder = $crate::__spec_section!(builder, Inputs, $inputs); )?
                $( builder = $crate::__spec_section!(builder, Outputs, $outputs); )?
                $( builder = $crate::__spec_aliases!(builder, input_alias, $in_aliases); )?
                $( builder = $crate::__spec_aliases!(builder, output_alias, $out_aliases); )?
                builder
            }
        }

        impl $crate::spec::ComponentSpec for $name {
            fn descriptor() -> ::std::result::Result<&'static $crate::spec::Descriptor, $crate::errors::DefinitionError> {
                static DESCRIPTOR: $crate::__private::Lazy<
                    ::std::result::Result<$crate::spec::Descriptor, $crate::errors::DefinitionError>,
                > = $crate::__private::Lazy::new(|| $name::declaration().build());
                DESCRIPTOR.as_ref().map_err(::std::clone::Clone::clone)
            }

            fn from_instance(instance: $crate::spec::SpecInstance) -> Self {
                Self(instance)
            }

            fn into_instance(self) -> $crate::spec::SpecInstance {
                self.0
            }
        }

        impl ::std::ops::Deref for $name {
            type Target = $crate::spec::SpecInstance;

            fn deref(&self) -> &$crate::spec::SpecInstance {
                &self.0
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __spec_section {
    ($builder:ident, $section:ident, { $($field:literal => $spec:expr),* $(,)? }) => {{
        let b = $builder.declare($crate::spec::Section::$section);
        $( let b = b.entry($crate::spec::Section::$section, $field, $spec); )*
        b
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __spec_aliases {
    ($builder:ident, $method:ident, { $($alias:literal => $target:literal),* $(,)? }) => {{
        let b = $builder;
        $( let b = b.$method($alias, $target); )*
        b
    }};
}
