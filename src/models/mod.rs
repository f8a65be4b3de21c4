mod application;
mod brand;
mod common;
mod factor;
mod policy;
mod policy_rule;

pub use application::{
    ApplicationSettingsApplication, ApplicationSettingsNotes, ApplicationSettingsNotifications,
    ApplicationSettingsNotificationsVpn, ApplicationSettingsNotificationsVpnNetwork,
    OAuth2Client, SamlApplicationSettings, SamlApplicationSettingsSignOn,
    SamlAttributeStatement, SwaApplicationSettings, SwaApplicationSettingsApplication,
};
pub use brand::{
    Brand, EmailTemplate, EmailTemplateContent, EmailTemplateCustomization,
    EmailTemplateCustomizationRequest, EmailTemplateTestRequest, ImageUploadResponse, Theme,
    ThemeResponse,
};
pub use common::IncludeExclude;
pub use factor::{
    ActivateFactorRequest, AnyFactor, CallUserFactor, CallUserFactorProfile, CustomUserFactor,
    EmailUserFactor, EmailUserFactorProfile, HardwareUserFactor, HardwareUserFactorProfile,
    HotpUserFactor, HotpUserFactorProfile, PushUserFactor, PushUserFactorProfile,
    SecurityQuestion, SecurityQuestionUserFactor, SecurityQuestionUserFactorProfile,
    SmsUserFactor, SmsUserFactorProfile, TokenUserFactor, TokenUserFactorProfile,
    TotpUserFactor, TotpUserFactorProfile, TypedUserFactor, U2fUserFactor,
    U2fUserFactorProfile, UserFactor, VerifyFactorRequest, VerifyUserFactorResponse,
    WebAuthnUserFactor, WebAuthnUserFactorProfile, WebUserFactor, WebUserFactorProfile,
};
pub use policy::{
    AnyPolicy, AppAndInstancePolicyRuleCondition, AppInstanceRef, DevicePolicyRuleCondition,
    DevicePolicyRuleConditionPlatform, IdentityProviderPolicy,
    IdentityProviderPolicyRuleCondition, MdmEnrollmentPolicyRuleCondition,
    PasswordPolicyAuthenticationProviderCondition, PlatformConditionEvaluatorPlatform,
    PlatformConditionOperatingSystem, PlatformPolicyRuleCondition, Policy, PolicyAccountLink,
    PolicyAccountLinkFilter, PolicyNetworkCondition, PolicyPeopleCondition,
    PolicyRuleAuthContextCondition, PolicyRuleConditions, PolicySubject,
    PolicyUserNameTemplate, Provisioning, ProvisioningAction, ProvisioningConditions,
    ProvisioningGroups, RiskPolicyRuleCondition, RiskScorePolicyRuleCondition,
    UserIdentifierPattern, UserIdentifierPolicyRuleCondition, UserStatusPolicyRuleCondition,
};
pub use policy_rule::{
    AccessAction, AppSignOnAction, EnrollAction, IdpPolicyRuleAction,
    IdpPolicyRuleActionProvider, PolicyRule, PolicyRuleActions, SignOnAction, SignOnSession,
    VerificationMethod,
};
