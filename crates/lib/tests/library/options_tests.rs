//! Merge and rendering properties across all three option layers.

use guestbind_lib::options::{EffectiveOptions, OptionCatalog, OptionKind, OptionMap, OptionValue, render_args};

use super::common::options;

fn rendered(global: &OptionMap, folder: &OptionMap) -> Vec<String> {
  let catalog = OptionCatalog::bindfs();
  render_args(&catalog, &EffectiveOptions::merge(&catalog, global, folder))
}

#[test]
fn flags_never_carry_a_value_whatever_layer_sets_them() {
  let catalog = OptionCatalog::bindfs();
  let flags: Vec<_> = catalog
    .iter()
    .filter(|spec| spec.kind == OptionKind::Flag)
    .map(|spec| spec.name.clone())
    .collect();

  for flag in &flags {
    let on = options(&[(flag.as_str(), "yes".into())]);
    let from_global = rendered(&on, &OptionMap::new());
    let from_folder = rendered(&OptionMap::new(), &on);

    for args in [from_global, from_folder] {
      assert!(args.contains(&format!("--{}", flag)), "{} should render", flag);
      assert!(!args.iter().any(|a| a.starts_with(&format!("--{}=", flag))));
    }
  }
}

#[test]
fn folder_false_clears_global_flag() {
  let global = options(&[("chmod-ignore", true.into())]);
  let folder = options(&[("chmod-ignore", false.into())]);
  assert!(rendered(&global, &OptionMap::new()).contains(&"--chmod-ignore".to_string()));
  assert!(!rendered(&global, &folder).contains(&"--chmod-ignore".to_string()));
}

#[test]
fn top_layer_null_suppresses_lower_value() {
  let global = options(&[("create-for-user", "www-data".into())]);
  let folder = options(&[("create-for-user", OptionValue::Null), ("owner", OptionValue::Null)]);

  let args = rendered(&global, &folder);
  assert!(!args.iter().any(|a| a.starts_with("--create-for-user")));
  assert!(!args.iter().any(|a| a.starts_with("--owner")));
  assert!(args.contains(&"--group=vagrant".to_string()));
}

#[test]
fn precedence_d2_over_d1_over_d0() {
  let d1 = options(&[("perms", "a=rX".into())]);
  let d2 = options(&[("perms", "u=rw".into())]);

  assert!(rendered(&d1, &d2).contains(&"--perms=u=rw".to_string()));
  assert!(rendered(&d1, &OptionMap::new()).contains(&"--perms=a=rX".to_string()));
  assert!(rendered(&OptionMap::new(), &OptionMap::new()).contains(&"--perms=u=rwX:g=rD:o=rD".to_string()));
}
