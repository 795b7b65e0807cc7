mod enums;
pub use self::enums::{AccessLevel, FolderType, ObjectType, OperationKind, SubjectKind, UserType};

mod operation;
pub use self::operation::UpdateOperation;
pub(crate) use self::operation::validate_operations;

mod user;
pub use self::user::{User, UserID};

mod group;
pub use self::group::{Group, GroupID, Member, UserInvite};

mod folder;
pub use self::folder::{Folder, FolderID, NewFolder};

mod space;
pub use self::space::{CreateSpaceOptions, Space, SpaceID};

mod configuration_variable;
pub use self::configuration_variable::{
    ConfigurationVariable, ConfigurationVariableInput, EnvironmentValue,
};

mod permission;
pub use self::permission::{
    AccessData, AccessList, AccessSources, PermissionObject, PermissionSubject, Subject,
};

mod user_attribute;
pub use self::user_attribute::{OrganizationAttribute, UserAttribute};
