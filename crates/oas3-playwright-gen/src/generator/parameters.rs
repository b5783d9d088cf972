use crate::generator::{
  document::{Parameter, ParameterLocation},
  errors::GenerationError,
  module_assembler::GeneratedInterface,
  ts::{TsType, property_key},
  type_resolver::TypeResolver,
};

/// A parameter together with its resolved TypeScript type.
#[derive(Debug, Clone)]
pub(crate) struct ParameterField<'a> {
  pub(crate) parameter: &'a Parameter,
  pub(crate) ty: TsType,
}

impl ParameterField<'_> {
  /// Header parameters are always required in the generated interface,
  /// whatever the document says.
  pub(crate) fn is_optional(&self) -> bool {
    !self.parameter.required && self.parameter.location != ParameterLocation::Header
  }

  fn declaration(&self) -> String {
    format!(
      "  {}{}: {};",
      property_key(&self.parameter.name),
      if self.is_optional() { "?" } else { "" },
      self.ty.render(1)
    )
  }
}

/// An operation's parameters, resolved once and viewed by location.
#[derive(Debug, Clone, Default)]
pub(crate) struct ClassifiedParameters<'a> {
  fields: Vec<ParameterField<'a>>,
}

impl<'a> ClassifiedParameters<'a> {
  pub(crate) fn classify(resolver: &TypeResolver<'_>, parameters: &[&'a Parameter]) -> Result<Self, GenerationError> {
    let fields = parameters
      .iter()
      .copied()
      .map(|parameter| {
        Ok(ParameterField {
          parameter,
          ty: resolver.resolve_optional(parameter.schema.as_ref())?,
        })
      })
      .collect::<Result<Vec<_>, GenerationError>>()?;

    Ok(Self { fields })
  }

  pub(crate) fn fields(&self) -> &[ParameterField<'a>] {
    &self.fields
  }

  pub(crate) fn located(&self, location: ParameterLocation) -> impl Iterator<Item = &'a Parameter> + '_ {
    self
      .fields
      .iter()
      .filter(move |field| field.parameter.location == location)
      .map(|field| field.parameter)
  }

  pub(crate) fn path(&self) -> Vec<&'a Parameter> {
    self.located(ParameterLocation::Path).collect()
  }

  pub(crate) fn query(&self) -> Vec<&'a Parameter> {
    self.located(ParameterLocation::Query).collect()
  }

  pub(crate) fn header(&self) -> Vec<&'a Parameter> {
    self.located(ParameterLocation::Header).collect()
  }

  /// The `params` interface. Emitted even when there are no parameters.
  pub(crate) fn interface(&self, name: &str) -> GeneratedInterface {
    let mut declaration = format!("export interface {name} {{\n");
    for field in &self.fields {
      declaration.push_str(&field.declaration());
      declaration.push('\n');
    }
    declaration.push('}');

    GeneratedInterface {
      name: name.to_string(),
      declaration,
    }
  }
}
