use crate::access_control::domain::model::value_objects::role_name::RoleName;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RoleClaimLookup {
    Found(RoleName),
    MissingContainer,
    MissingField,
    WrongType,
}
