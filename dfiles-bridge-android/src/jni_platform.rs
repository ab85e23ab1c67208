//! `AndroidPlatform` over JNI

use async_trait::async_trait;
use jni::objects::{GlobalRef, JClass, JObject, JString, JValue};
use jni::{JNIEnv, JavaVM};

use dfiles_bridge_core::error::{PlatformError, PlatformResult};
use dfiles_bridge_core::types::{ApiLevel, Intent, ResolvedActivity, Uri};
use dfiles_bridge_core::AndroidPlatform;

/// `PackageManager.MATCH_DEFAULT_ONLY`
const MATCH_DEFAULT_ONLY: i32 = 0x0001_0000;

/// Local references one call may hold at once
const LOCAL_FRAME_CAPACITY: i32 = 32;

const FILE_PROVIDER_CLASS: &str = "androidx.core.content.FileProvider";

/// Android platform backed by the live application context.
///
/// The API level and package name are read once at construction; every other
/// call goes to the OS. The context stays owned by the shell, this only
/// keeps a global reference to it.
pub struct JniPlatform {
    vm: JavaVM,
    context: GlobalRef,
    api_level: ApiLevel,
    package_name: String,
}

impl JniPlatform {
    /// Borrow the context and VM the shell registered with `ndk-context`.
    pub fn from_ndk_context() -> PlatformResult<Self> {
        let ctx = ndk_context::android_context();
        if ctx.context().is_null() {
            return Err(PlatformError::new(
                "ndk_context",
                "Android context is null, native activity not initialised",
            ));
        }

        // SAFETY: `ctx.vm()` is the `JavaVM*` set by the NDK glue and stays
        // valid for the lifetime of the process.
        #[allow(unsafe_code)]
        let vm = unsafe { JavaVM::from_raw(ctx.vm().cast()) }
            .map_err(|e| PlatformError::new("JavaVM::from_raw", e.to_string()))?;

        let (context, api_level, package_name) = {
            let mut env = vm
                .attach_current_thread()
                .map_err(|e| PlatformError::new("attach_current_thread", e.to_string()))?;

            // SAFETY: the NDK guarantees this pointer is a valid global
            // jobject for the hosting context; it is never deleted here.
            #[allow(unsafe_code)]
            let raw = unsafe { JObject::from_raw(ctx.context().cast()) };

            let context = env
                .new_global_ref(&raw)
                .map_err(|e| platform_error(&mut env, "new_global_ref", e))?;
            let sdk_int = env
                .get_static_field("android/os/Build$VERSION", "SDK_INT", "I")
                .and_then(|v| v.i())
                .map_err(|e| platform_error(&mut env, "Build.VERSION.SDK_INT", e))?;
            let package_name = env
                .call_method(&raw, "getPackageName", "()Ljava/lang/String;", &[])
                .and_then(|v| v.l())
                .and_then(|s| java_string(&mut env, s))
                .map_err(|e| platform_error(&mut env, "getPackageName", e))?;

            (
                context,
                ApiLevel(u32::try_from(sdk_int).unwrap_or_default()),
                package_name,
            )
        };

        log::info!("JniPlatform ready: {package_name} on {api_level}");
        Ok(Self {
            vm,
            context,
            api_level,
            package_name,
        })
    }

    /// Attach the calling thread and run `f` inside a local reference frame.
    ///
    /// A pending Java exception is cleared and its text becomes the error message.
    fn with_env<T, F>(&self, operation: &str, f: F) -> PlatformResult<T>
    where
        F: FnOnce(&mut JNIEnv<'_>, &JObject<'_>) -> jni::errors::Result<T>,
    {
        let mut env = self
            .vm
            .attach_current_thread()
            .map_err(|e| PlatformError::new(operation, e.to_string()))?;
        let context = self.context.as_obj();

        env.with_local_frame(LOCAL_FRAME_CAPACITY, |env| f(env, context))
            .map_err(|e| platform_error(&mut env, operation, e))
    }
}

#[async_trait]
impl AndroidPlatform for JniPlatform {
    fn api_level(&self) -> ApiLevel {
        self.api_level
    }

    fn package_name(&self) -> &str {
        &self.package_name
    }

    async fn content_uri_for_file(&self, authority: &str, path: &str) -> PlatformResult<Uri> {
        self.with_env("FileProvider.getUriForFile", |env, context| {
            let provider = load_app_class(env, context, FILE_PROVIDER_CLASS)?;
            let j_authority = env.new_string(authority)?;
            let j_path = env.new_string(path)?;
            let file = env.new_object(
                "java/io/File",
                "(Ljava/lang/String;)V",
                &[JValue::Object(&j_path)],
            )?;

            let uri = env
                .call_static_method(
                    &provider,
                    "getUriForFile",
                    "(Landroid/content/Context;Ljava/lang/String;Ljava/io/File;)Landroid/net/Uri;",
                    &[
                        JValue::Object(context),
                        JValue::Object(&j_authority),
                        JValue::Object(&file),
                    ],
                )?
                .l()?;
            java_to_string(env, &uri)
        })
        .map(Uri::parse)
    }

    async fn query_activities(&self, intent: &Intent) -> PlatformResult<Vec<ResolvedActivity>> {
        self.with_env("queryIntentActivities", |env, context| {
            let j_intent = new_intent(env, intent)?;
            let pm = env
                .call_method(
                    context,
                    "getPackageManager",
                    "()Landroid/content/pm/PackageManager;",
                    &[],
                )?
                .l()?;
            let list = env
                .call_method(
                    &pm,
                    "queryIntentActivities",
                    "(Landroid/content/Intent;I)Ljava/util/List;",
                    &[JValue::Object(&j_intent), JValue::Int(MATCH_DEFAULT_ONLY)],
                )?
                .l()?;

            let size = env.call_method(&list, "size", "()I", &[])?.i()?;
            let mut activities = Vec::with_capacity(usize::try_from(size).unwrap_or_default());
            for index in 0..size {
                let resolve_info = env
                    .call_method(&list, "get", "(I)Ljava/lang/Object;", &[JValue::Int(index)])?
                    .l()?;
                let activity_info = env
                    .get_field(
                        &resolve_info,
                        "activityInfo",
                        "Landroid/content/pm/ActivityInfo;",
                    )?
                    .l()?;
                let package_name = string_field(env, &activity_info, "packageName")?;
                let class_name = string_field(env, &activity_info, "name")?;
                activities.push(ResolvedActivity::new(package_name, class_name));

                env.delete_local_ref(activity_info)?;
                env.delete_local_ref(resolve_info)?;
            }
            Ok(activities)
        })
    }

    async fn start_activity(&self, intent: &Intent) -> PlatformResult<()> {
        self.with_env("startActivity", |env, context| {
            let j_intent = new_intent(env, intent)?;
            env.call_method(
                context,
                "startActivity",
                "(Landroid/content/Intent;)V",
                &[JValue::Object(&j_intent)],
            )?;
            Ok(())
        })
    }

    async fn is_external_storage_manager(&self) -> PlatformResult<bool> {
        self.with_env("Environment.isExternalStorageManager", |env, _context| {
            env.call_static_method(
                "android/os/Environment",
                "isExternalStorageManager",
                "()Z",
                &[],
            )?
            .z()
        })
    }
}

// ---------------------------------------------------------------------------
// JNI helpers
// ---------------------------------------------------------------------------

/// Build an `android.content.Intent` from the bridge's intent model.
fn new_intent<'local>(
    env: &mut JNIEnv<'local>,
    intent: &Intent,
) -> jni::errors::Result<JObject<'local>> {
    let action = env.new_string(&intent.action)?;
    let j_intent = env.new_object(
        "android/content/Intent",
        "(Ljava/lang/String;)V",
        &[JValue::Object(&action)],
    )?;

    let mime = match &intent.mime_type {
        Some(mime) => Some(env.new_string(mime)?),
        None => None,
    };

    match (&intent.data, &mime) {
        (Some(data), Some(mime)) => {
            let uri = parse_uri(env, data)?;
            env.call_method(
                &j_intent,
                "setDataAndType",
                "(Landroid/net/Uri;Ljava/lang/String;)Landroid/content/Intent;",
                &[JValue::Object(&uri), JValue::Object(mime)],
            )?;
        }
        (Some(data), None) => {
            let uri = parse_uri(env, data)?;
            env.call_method(
                &j_intent,
                "setData",
                "(Landroid/net/Uri;)Landroid/content/Intent;",
                &[JValue::Object(&uri)],
            )?;
        }
        (None, Some(mime)) => {
            env.call_method(
                &j_intent,
                "setType",
                "(Ljava/lang/String;)Landroid/content/Intent;",
                &[JValue::Object(mime)],
            )?;
        }
        (None, None) => {}
    }

    // Java int 按位解释
    let flags = i32::from_ne_bytes(intent.flags.bits().to_ne_bytes());
    env.call_method(
        &j_intent,
        "addFlags",
        "(I)Landroid/content/Intent;",
        &[JValue::Int(flags)],
    )?;

    if let Some(component) = &intent.component {
        let package_name = env.new_string(&component.package_name)?;
        let class_name = env.new_string(&component.class_name)?;
        env.call_method(
            &j_intent,
            "setClassName",
            "(Ljava/lang/String;Ljava/lang/String;)Landroid/content/Intent;",
            &[JValue::Object(&package_name), JValue::Object(&class_name)],
        )?;
    }

    Ok(j_intent)
}

/// `Uri.parse(uri)`
fn parse_uri<'local>(env: &mut JNIEnv<'local>, uri: &Uri) -> jni::errors::Result<JObject<'local>> {
    let j_uri = env.new_string(uri.as_str())?;
    env.call_static_method(
        "android/net/Uri",
        "parse",
        "(Ljava/lang/String;)Landroid/net/Uri;",
        &[JValue::Object(&j_uri)],
    )?
    .l()
}

/// Load a class bundled with the app (e.g. androidx) through the context's
/// class loader; `FindClass` on an attached native thread only sees the
/// framework classes.
fn load_app_class<'local>(
    env: &mut JNIEnv<'local>,
    context: &JObject<'_>,
    name: &str,
) -> jni::errors::Result<JClass<'local>> {
    let loader = env
        .call_method(context, "getClassLoader", "()Ljava/lang/ClassLoader;", &[])?
        .l()?;
    let j_name = env.new_string(name)?;
    let class = env
        .call_method(
            &loader,
            "loadClass",
            "(Ljava/lang/String;)Ljava/lang/Class;",
            &[JValue::Object(&j_name)],
        )?
        .l()?;
    Ok(JClass::from(class))
}

fn java_string(env: &mut JNIEnv<'_>, value: JObject<'_>) -> jni::errors::Result<String> {
    Ok(env.get_string(&JString::from(value))?.into())
}

fn java_to_string(env: &mut JNIEnv<'_>, obj: &JObject<'_>) -> jni::errors::Result<String> {
    let text = env
        .call_method(obj, "toString", "()Ljava/lang/String;", &[])?
        .l()?;
    java_string(env, text)
}

fn string_field(env: &mut JNIEnv<'_>, obj: &JObject<'_>, name: &str) -> jni::errors::Result<String> {
    let value = env.get_field(obj, name, "Ljava/lang/String;")?.l()?;
    java_string(env, value)
}

/// Convert a JNI failure into a `PlatformError`, clearing any pending Java
/// exception so the thread stays usable.
fn platform_error(env: &mut JNIEnv<'_>, operation: &str, err: jni::errors::Error) -> PlatformError {
    let message = pending_exception(env).unwrap_or_else(|| err.to_string());
    PlatformError::new(operation, message)
}

fn pending_exception(env: &mut JNIEnv<'_>) -> Option<String> {
    if !env.exception_check().unwrap_or(false) {
        return None;
    }
    let throwable = env.exception_occurred().ok();
    if let Err(e) = env.exception_clear() {
        log::error!("Failed to clear pending Java exception: {e}");
    }
    let throwable = throwable?;
    java_to_string(env, &throwable).ok()
}
