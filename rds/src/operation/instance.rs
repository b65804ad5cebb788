/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Instance lifecycle, flavors and settings.

use crate::model::{
    BACKUP_STRATEGY, CHARGE_INFO, DATASTORE, HA, INSTANCE_ID, JOB_ID, LANGUAGE, LIMIT, NODE,
    OFFSET, RESP, TAG, TOTAL_COUNT, VOLUME, WORKFLOW_ID,
};
use crate::{MemberSchema, ShapeType};

const DATABASE_NAME: MemberSchema =
    MemberSchema::required("database_name", ShapeType::String).in_path();

structure! {
    /// Body of `CreateInstance`.
    pub INSTANCE_REQUEST = "InstanceRequest" [
        MemberSchema::required("name", ShapeType::String),
        MemberSchema::required("datastore", ShapeType::Structure(&DATASTORE)),
        MemberSchema::optional("ha", ShapeType::Structure(&HA)),
        MemberSchema::optional("configuration_id", ShapeType::String),
        MemberSchema::optional("port", ShapeType::String),
        MemberSchema::optional("password", ShapeType::String),
        MemberSchema::optional("backup_strategy", ShapeType::Structure(&BACKUP_STRATEGY)),
        MemberSchema::optional("enterprise_project_id", ShapeType::String),
        MemberSchema::optional("disk_encryption_id", ShapeType::String),
        MemberSchema::required("flavor_ref", ShapeType::String),
        MemberSchema::required("volume", ShapeType::Structure(&VOLUME)),
        MemberSchema::required("region", ShapeType::String),
        MemberSchema::required("availability_zone", ShapeType::String),
        MemberSchema::required("vpc_id", ShapeType::String),
        MemberSchema::required("subnet_id", ShapeType::String),
        MemberSchema::optional("data_vip", ShapeType::String),
        MemberSchema::required("security_group_id", ShapeType::String),
        MemberSchema::optional("charge_info", ShapeType::Structure(&CHARGE_INFO)),
        MemberSchema::optional("time_zone", ShapeType::String),
        MemberSchema::optional("replica_of_id", ShapeType::String),
        MemberSchema::optional("collation", ShapeType::String),
        MemberSchema::optional("tags", ShapeType::List(&ShapeType::Structure(&TAG))),
        MemberSchema::optional("unchangeable_param", ShapeType::Map(&ShapeType::String)),
        MemberSchema::optional("dry_run", ShapeType::Boolean),
        MemberSchema::optional("count", ShapeType::Integer),
    ];

    /// Instance as returned by `CreateInstance`.
    pub CREATED_INSTANCE = "CreateInstanceRespItem" [
        MemberSchema::optional("id", ShapeType::String),
        MemberSchema::optional("name", ShapeType::String),
        MemberSchema::optional("status", ShapeType::String),
        MemberSchema::optional("datastore", ShapeType::Structure(&DATASTORE)),
        MemberSchema::optional("ha", ShapeType::Structure(&HA)),
        MemberSchema::optional("port", ShapeType::String),
        MemberSchema::optional("backup_strategy", ShapeType::Structure(&BACKUP_STRATEGY)),
        MemberSchema::optional("flavor_ref", ShapeType::String),
        MemberSchema::optional("volume", ShapeType::Structure(&VOLUME)),
        MemberSchema::optional("region", ShapeType::String),
        MemberSchema::optional("availability_zone", ShapeType::String),
        MemberSchema::optional("vpc_id", ShapeType::String),
        MemberSchema::optional("subnet_id", ShapeType::String),
        MemberSchema::optional("security_group_id", ShapeType::String),
        MemberSchema::optional("charge_info", ShapeType::Structure(&CHARGE_INFO)),
    ];

    /// Instance as returned by `ListInstances`.
    pub INSTANCE = "InstanceResponse" [
        MemberSchema::required("id", ShapeType::String),
        MemberSchema::required("name", ShapeType::String),
        MemberSchema::required("status", ShapeType::String),
        MemberSchema::optional("private_ips", ShapeType::List(&ShapeType::String)),
        MemberSchema::optional("private_dns_names", ShapeType::List(&ShapeType::String)),
        MemberSchema::optional("public_ips", ShapeType::List(&ShapeType::String)),
        MemberSchema::optional("port", ShapeType::Integer),
        MemberSchema::optional("type", ShapeType::String),
        MemberSchema::optional("ha", ShapeType::Structure(&HA)),
        MemberSchema::optional("region", ShapeType::String),
        MemberSchema::optional("datastore", ShapeType::Structure(&DATASTORE)),
        MemberSchema::optional("created", ShapeType::String),
        MemberSchema::optional("updated", ShapeType::String),
        MemberSchema::optional("db_user_name", ShapeType::String),
        MemberSchema::optional("vpc_id", ShapeType::String),
        MemberSchema::optional("subnet_id", ShapeType::String),
        MemberSchema::optional("security_group_id", ShapeType::String),
        MemberSchema::optional("flavor_ref", ShapeType::String),
        MemberSchema::optional("volume", ShapeType::Structure(&VOLUME)),
        MemberSchema::optional("switch_strategy", ShapeType::String),
        MemberSchema::optional("read_only_by_user", ShapeType::Boolean),
        MemberSchema::optional("backup_strategy", ShapeType::Structure(&BACKUP_STRATEGY)),
        MemberSchema::optional("maintenance_window", ShapeType::String),
        MemberSchema::optional("nodes", ShapeType::List(&ShapeType::Structure(&NODE))),
        MemberSchema::optional("related_instance", ShapeType::List(&ShapeType::Document)),
        MemberSchema::optional("disk_encryption_id", ShapeType::String),
        MemberSchema::optional("enterprise_project_id", ShapeType::String),
        MemberSchema::optional("time_zone", ShapeType::String),
        MemberSchema::optional("charge_info", ShapeType::Structure(&CHARGE_INFO)),
        MemberSchema::optional("tags", ShapeType::List(&ShapeType::Structure(&TAG))),
        MemberSchema::optional("storage_used_space", ShapeType::Long),
    ];

    /// Engine version.
    pub DATASTORE_VERSION = "LDatastore" [
        MemberSchema::required("id", ShapeType::String),
        MemberSchema::required("name", ShapeType::String),
    ];

    /// Instance flavor.
    pub FLAVOR = "Flavor" [
        MemberSchema::required("id", ShapeType::String),
        MemberSchema::required("vcpus", ShapeType::String),
        MemberSchema::required("ram", ShapeType::Integer),
        MemberSchema::required("spec_code", ShapeType::String),
        MemberSchema::required("instance_mode", ShapeType::String),
        MemberSchema::required("az_status", ShapeType::Map(&ShapeType::String)),
        MemberSchema::optional("version_name", ShapeType::List(&ShapeType::String)),
        MemberSchema::optional("group_type", ShapeType::String),
    ];

    /// Storage type and its availability per zone.
    pub STORAGE = "Storage" [
        MemberSchema::required("name", ShapeType::String),
        MemberSchema::required("az_status", ShapeType::Map(&ShapeType::String)),
        MemberSchema::optional("support_compute_group_type", ShapeType::List(&ShapeType::String)),
    ];

    /// Asynchronous task.
    pub JOB = "GetJobInfoResponseBodyJob" [
        MemberSchema::required("id", ShapeType::String),
        MemberSchema::required("name", ShapeType::String),
        MemberSchema::required("status", ShapeType::String),
        MemberSchema::required("created", ShapeType::String),
        MemberSchema::optional("ended", ShapeType::String),
        MemberSchema::optional("process", ShapeType::String),
        MemberSchema::optional("instance", ShapeType::Map(&ShapeType::String)),
        MemberSchema::optional("entities", ShapeType::Document),
        MemberSchema::optional("fail_reason", ShapeType::String),
    ];

    /// Usage and quota of one resource type.
    pub RESOURCE = "Resource" [
        MemberSchema::required("type", ShapeType::String),
        MemberSchema::required("used", ShapeType::Integer),
        MemberSchema::required("quota", ShapeType::Integer),
    ];

    /// Quotas of the project.
    pub QUOTA = "Quota" [
        MemberSchema::required("resources", ShapeType::List(&ShapeType::Structure(&RESOURCE))),
    ];

    /// New flavor for `StartResizeFlavorAction`.
    pub RESIZE_FLAVOR = "ResizeFlavorObject" [
        MemberSchema::required("spec_code", ShapeType::String),
        MemberSchema::optional("is_auto_pay", ShapeType::Boolean),
    ];

    /// New storage size for `StartInstanceEnlargeVolumeAction`.
    pub ENLARGE_VOLUME = "EnlargeVolumeObject" [
        MemberSchema::required("size", ShapeType::Integer),
        MemberSchema::optional("is_auto_pay", ShapeType::Boolean),
    ];

    /// Instance held in the recycle bin.
    pub RECYCLE_INSTANCE = "RecycleInstanceV3" [
        MemberSchema::required("id", ShapeType::String),
        MemberSchema::optional("name", ShapeType::String),
        MemberSchema::optional("ha_mode", ShapeType::String),
        MemberSchema::optional("engine_name", ShapeType::String),
        MemberSchema::optional("engine_version", ShapeType::String),
        MemberSchema::optional("pay_model", ShapeType::String),
        MemberSchema::optional("created_at", ShapeType::String),
        MemberSchema::optional("deleted_at", ShapeType::String),
        MemberSchema::optional("volume_type", ShapeType::String),
        MemberSchema::optional("volume_size", ShapeType::Integer),
        MemberSchema::optional("data_vip", ShapeType::String),
        MemberSchema::optional("enterprise_project_id", ShapeType::String),
        MemberSchema::optional("retained_until", ShapeType::String),
        MemberSchema::optional("recycle_backup_id", ShapeType::String),
        MemberSchema::optional("recycle_status", ShapeType::String),
    ];

    /// Recycle bin retention.
    pub RECYCLE_POLICY = "RecyclePolicy" [
        MemberSchema::required("retention_period_in_days", ShapeType::String),
    ];

    /// Private domain name of an instance.
    pub DNS_NAME = "DnsNameInfo" [
        MemberSchema::optional("dns_name", ShapeType::String),
        MemberSchema::optional("dns_type", ShapeType::String),
        MemberSchema::optional("ip", ShapeType::String),
        MemberSchema::optional("status", ShapeType::String),
    ];

    /// Where to download the SSL certificate of an instance.
    pub SSL_CERT_LINK = "CertInfo" [
        MemberSchema::optional("download_link", ShapeType::String),
        MemberSchema::optional("category", ShapeType::String),
    ];

    /// Conversion of a single instance to primary/standby.
    pub SINGLE_TO_HA = "Single2Ha" [
        MemberSchema::required("az_code_new_node", ShapeType::String),
        MemberSchema::optional("dsspool_id", ShapeType::String),
        MemberSchema::optional("is_auto_pay", ShapeType::Boolean),
    ];

    /// Tag key with every value in use in the project.
    pub PROJECT_TAG = "TagResp" [
        MemberSchema::required("key", ShapeType::String),
        MemberSchema::optional("values", ShapeType::List(&ShapeType::String)),
    ];
}

operations! {
    /// Creates a DB instance, read replica or DR instance.
    CREATE_INSTANCE = CreateInstance(POST "/v3/{project_id}/instances") {
        input: [
            LANGUAGE,
            MemberSchema::required("body", ShapeType::Structure(&INSTANCE_REQUEST)).as_payload(),
        ],
        output: [
            MemberSchema::optional("instance", ShapeType::Structure(&CREATED_INSTANCE)),
            JOB_ID,
            MemberSchema::optional("order_id", ShapeType::String),
        ],
    }

    /// Deletes a pay-per-use DB instance.
    DELETE_INSTANCE = DeleteInstance(DELETE "/v3/{project_id}/instances/{instance_id}") {
        input: [LANGUAGE, INSTANCE_ID],
        output: [JOB_ID],
    }

    /// Lists DB instances matching the given filters.
    LIST_INSTANCES = ListInstances(GET "/v3/{project_id}/instances") {
        input: [
            LANGUAGE,
            MemberSchema::optional("id", ShapeType::String).in_query(),
            MemberSchema::optional("name", ShapeType::String).in_query(),
            MemberSchema::optional("type", ShapeType::String).in_query(),
            MemberSchema::optional("datastore_type", ShapeType::String).in_query(),
            MemberSchema::optional("vpc_id", ShapeType::String).in_query(),
            MemberSchema::optional("subnet_id", ShapeType::String).in_query(),
            OFFSET,
            LIMIT,
            MemberSchema::optional("tags", ShapeType::String).in_query(),
        ],
        output: [
            MemberSchema::optional("instances", ShapeType::List(&ShapeType::Structure(&INSTANCE))),
            TOTAL_COUNT,
        ],
    }

    /// Starts a stopped instance.
    STARTUP_INSTANCE = StartupInstance(POST "/v3/{project_id}/instances/{instance_id}/action/startup") {
        input: [LANGUAGE, INSTANCE_ID],
        output: [JOB_ID],
    }

    /// Stops an instance.
    STOP_INSTANCE = StopInstance(POST "/v3/{project_id}/instances/{instance_id}/action/shutdown") {
        input: [LANGUAGE, INSTANCE_ID],
        output: [JOB_ID],
    }

    /// Reboots an instance.
    START_INSTANCE_RESTART_ACTION = StartInstanceRestartAction(POST "/v3/{project_id}/instances/{instance_id}/action") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("restart", ShapeType::Document),
        ],
        output: [JOB_ID],
    }

    /// Changes the flavor of an instance.
    START_RESIZE_FLAVOR_ACTION = StartResizeFlavorAction(POST "/v3/{project_id}/instances/{instance_id}/action") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("resize_flavor", ShapeType::Structure(&RESIZE_FLAVOR)),
        ],
        output: [JOB_ID, MemberSchema::optional("order_id", ShapeType::String)],
    }

    /// Scales up the storage of an instance.
    START_INSTANCE_ENLARGE_VOLUME_ACTION = StartInstanceEnlargeVolumeAction(POST "/v3/{project_id}/instances/{instance_id}/action") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("enlarge_volume", ShapeType::Structure(&ENLARGE_VOLUME)),
        ],
        output: [JOB_ID, MemberSchema::optional("order_id", ShapeType::String)],
    }

    /// Manually switches the primary and standby instances.
    START_FAILOVER = StartFailover(PUT "/v3/{project_id}/instances/{instance_id}/action/failover") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::optional("force", ShapeType::Boolean),
        ],
        output: [
            MemberSchema::optional("instanceId", ShapeType::String),
            MemberSchema::optional("nodeId", ShapeType::String),
            WORKFLOW_ID,
        ],
    }

    /// Changes the replication mode between primary and standby.
    CHANGE_FAILOVER_MODE = ChangeFailoverMode(PUT "/v3/{project_id}/instances/{instance_id}/failover/mode") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("mode", ShapeType::String),
        ],
        output: [
            MemberSchema::optional("instanceId", ShapeType::String),
            MemberSchema::optional("replicationMode", ShapeType::String),
            WORKFLOW_ID,
        ],
    }

    /// Changes the failover priority between reliability and availability.
    CHANGE_FAILOVER_STRATEGY = ChangeFailoverStrategy(PUT "/v3/{project_id}/instances/{instance_id}/failover/strategy") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("repairStrategy", ShapeType::String),
        ],
        output: [],
    }

    /// Sets the maintenance window.
    CHANGE_OPS_WINDOW = ChangeOpsWindow(PUT "/v3/{project_id}/instances/{instance_id}/ops-window") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("start_time", ShapeType::String),
            MemberSchema::required("end_time", ShapeType::String),
        ],
        output: [],
    }

    /// Changes the database port.
    UPDATE_PORT = UpdatePort(PUT "/v3/{project_id}/instances/{instance_id}/port") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("port", ShapeType::Integer),
        ],
        output: [WORKFLOW_ID],
    }

    /// Changes the floating IP address.
    UPDATE_DATA_IP = UpdateDataIp(PUT "/v3/{project_id}/instances/{instance_id}/ip") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("new_ip", ShapeType::String),
        ],
        output: [WORKFLOW_ID],
    }

    /// Renames an instance.
    UPDATE_INSTANCE_NAME = UpdateInstanceName(PUT "/v3/{project_id}/instances/{instance_id}/name") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("name", ShapeType::String),
        ],
        output: [],
    }

    /// Changes the security group of an instance.
    SET_SECURITY_GROUP = SetSecurityGroup(PUT "/v3/{project_id}/instances/{instance_id}/security-group") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("security_group_id", ShapeType::String),
        ],
        output: [WORKFLOW_ID],
    }

    /// Enables or disables SSL.
    SWITCH_SSL = SwitchSsl(PUT "/v3/{project_id}/instances/{instance_id}/ssl") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("ssl_option", ShapeType::Boolean),
        ],
        output: [],
    }

    /// Binds or unbinds an EIP.
    ATTACH_EIP = AttachEip(PUT "/v3/{project_id}/instances/{instance_id}/public-ip") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::optional("public_ip", ShapeType::String),
            MemberSchema::optional("public_ip_id", ShapeType::String),
            MemberSchema::required("is_bind", ShapeType::Boolean),
        ],
        output: [],
    }

    /// Shows the replication status between primary and standby.
    SHOW_REPLICATION_STATUS = ShowReplicationStatus(GET "/v3/{project_id}/instances/{instance_id}/replication/status") {
        input: [LANGUAGE, INSTANCE_ID],
        output: [
            MemberSchema::optional("replication_status", ShapeType::String),
            MemberSchema::optional("abnormal_reason", ShapeType::String),
        ],
    }

    /// Shows whether transparent data encryption is enabled.
    SHOW_TDE_STATUS = ShowTdeStatus(GET "/v3/{project_id}/instances/{instance_id}/tde-status") {
        input: [LANGUAGE, INSTANCE_ID],
        output: [
            MemberSchema::optional("instance_id", ShapeType::String),
            MemberSchema::optional("tde_status", ShapeType::String),
        ],
    }

    /// Enables transparent data encryption.
    UPDATE_TDE_STATUS = UpdateTdeStatus(PUT "/v3/{project_id}/instances/{instance_id}/tde") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::optional("rotate_day", ShapeType::Integer),
            MemberSchema::optional("secret_id", ShapeType::String),
            MemberSchema::optional("secret_name", ShapeType::String),
            MemberSchema::optional("secret_version", ShapeType::String),
        ],
        output: [RESP],
    }

    /// Shows the storage autoscaling policy.
    SHOW_AUTO_ENLARGE_POLICY = ShowAutoEnlargePolicy(GET "/v3/{project_id}/instances/{instance_id}/disk-auto-expansion") {
        input: [LANGUAGE, INSTANCE_ID],
        output: [
            MemberSchema::optional("switch_option", ShapeType::Boolean),
            MemberSchema::optional("limit_size", ShapeType::Integer),
            MemberSchema::optional("trigger_threshold", ShapeType::Integer),
        ],
    }

    /// Sets the storage autoscaling policy.
    SET_AUTO_ENLARGE_POLICY = SetAutoEnlargePolicy(PUT "/v3/{project_id}/instances/{instance_id}/disk-auto-expansion") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("switch_option", ShapeType::Boolean),
            MemberSchema::optional("limit_size", ShapeType::Integer),
            MemberSchema::optional("trigger_threshold", ShapeType::Integer),
        ],
        output: [],
    }

    /// Lists the tags of an instance.
    LIST_INSTANCE_TAGS = ListInstanceTags(GET "/v3/{project_id}/instances/{instance_id}/tags") {
        input: [LANGUAGE, INSTANCE_ID],
        output: [MemberSchema::optional("tags", ShapeType::List(&ShapeType::Structure(&TAG)))],
    }

    /// Adds tags to an instance.
    BATCH_TAG_ADD_ACTION = BatchTagAddAction(POST "/v3/{project_id}/instances/{instance_id}/tags/action") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("action", ShapeType::String),
            MemberSchema::required("tags", ShapeType::List(&ShapeType::Structure(&TAG))),
        ],
        output: [],
    }

    /// Lists engine versions.
    LIST_DATASTORES = ListDatastores(GET "/v3/{project_id}/datastores/{database_name}") {
        input: [LANGUAGE, DATABASE_NAME],
        output: [
            MemberSchema::required(
                "dataStores",
                ShapeType::List(&ShapeType::Structure(&DATASTORE_VERSION)),
            ),
        ],
    }

    /// Lists the instance flavors of an engine.
    LIST_FLAVORS = ListFlavors(GET "/v3/{project_id}/flavors/{database_name}") {
        input: [
            LANGUAGE,
            DATABASE_NAME,
            MemberSchema::optional("version_name", ShapeType::String).in_query(),
            MemberSchema::optional("spec_code", ShapeType::String).in_query(),
        ],
        output: [MemberSchema::optional("flavors", ShapeType::List(&ShapeType::Structure(&FLAVOR)))],
    }

    /// Lists storage types of an engine.
    LIST_STORAGE_TYPES = ListStorageTypes(GET "/v3/{project_id}/storage-type/{database_name}") {
        input: [
            LANGUAGE,
            DATABASE_NAME,
            MemberSchema::required("version_name", ShapeType::String).in_query(),
            MemberSchema::optional("ha_mode", ShapeType::String).in_query(),
        ],
        output: [
            MemberSchema::optional("storage_type", ShapeType::List(&ShapeType::Structure(&STORAGE))),
            MemberSchema::optional("dsspool_info", ShapeType::List(&ShapeType::Document)),
        ],
    }

    /// Shows an asynchronous task.
    LIST_JOB_INFO = ListJobInfo(GET "/v3/{project_id}/jobs") {
        input: [
            LANGUAGE,
            MemberSchema::required("id", ShapeType::String).in_query(),
        ],
        output: [MemberSchema::optional("job", ShapeType::Structure(&JOB))],
    }

    /// Shows the resource quotas of the project.
    SHOW_QUOTAS = ShowQuotas(GET "/v3/{project_id}/quotas") {
        input: [LANGUAGE],
        output: [MemberSchema::optional("quotas", ShapeType::Structure(&QUOTA))],
    }

    /// Removes tags from an instance.
    BATCH_TAG_DEL_ACTION = BatchTagDelAction(DELETE "/v3/{project_id}/instances/{instance_id}/tags/action") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("action", ShapeType::String),
            MemberSchema::required("tags", ShapeType::List(&ShapeType::Structure(&TAG))),
        ],
        output: [],
    }

    /// Lists every tag used by instances of the project.
    LIST_PROJECT_TAGS = ListProjectTags(GET "/v3/{project_id}/tags") {
        input: [LANGUAGE],
        output: [
            MemberSchema::optional("tags", ShapeType::List(&ShapeType::Structure(&PROJECT_TAG))),
        ],
    }

    /// Shows the private domain name of an instance.
    SHOW_DNS_NAME = ShowDnsName(GET "/v3/{project_id}/instances/{instance_id}/dns") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("dns_type", ShapeType::String).in_query(),
        ],
        output: [
            MemberSchema::optional("dns_name_list", ShapeType::List(&ShapeType::Structure(&DNS_NAME))),
        ],
    }

    /// Applies for a private domain name.
    CREATE_DNS_NAME = CreateDnsName(POST "/v3/{project_id}/instances/{instance_id}/create-dns") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("dns_type", ShapeType::String),
        ],
        output: [JOB_ID],
    }

    /// Changes the private domain name.
    UPDATE_DNS_NAME = UpdateDnsName(PUT "/v3/{project_id}/instances/{instance_id}/modify-dns") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("dns_name", ShapeType::String),
            MemberSchema::required("dns_type", ShapeType::String),
        ],
        output: [JOB_ID],
    }

    /// Lists deleted instances held in the recycle bin.
    LIST_RECYCLE_INSTANCES = ListRecycleInstances(GET "/v3/{project_id}/recycle-instances") {
        input: [LANGUAGE, OFFSET, LIMIT],
        output: [
            TOTAL_COUNT,
            MemberSchema::optional(
                "instances",
                ShapeType::List(&ShapeType::Structure(&RECYCLE_INSTANCE)),
            ),
        ],
    }

    /// Shows how long deleted instances stay in the recycle bin.
    SHOW_RECYCLE_POLICY = ShowRecyclePolicy(GET "/v3/{project_id}/instances/recycle-policy") {
        input: [LANGUAGE],
        output: [MemberSchema::optional("days", ShapeType::Integer)],
    }

    /// Sets how long deleted instances stay in the recycle bin.
    START_RECYCLE_POLICY = StartRecyclePolicy(PUT "/v3/{project_id}/instances/recycle-policy") {
        input: [
            LANGUAGE,
            MemberSchema::required("recycle_policy", ShapeType::Structure(&RECYCLE_POLICY)),
        ],
        output: [MemberSchema::optional("result", ShapeType::String)],
    }

    /// Shows replication between a DR instance and its primary.
    SHOW_DR_REPLICA_STATUS = ShowDrReplicaStatus(GET "/v3/{project_id}/instances/disaster-recovery-status") {
        input: [
            LANGUAGE,
            MemberSchema::required("instance_id", ShapeType::String).in_query(),
        ],
        output: [
            MemberSchema::optional("replica_state", ShapeType::String),
            MemberSchema::optional("wal_write_receive_delay_in_mb", ShapeType::String),
            MemberSchema::optional("wal_write_replay_delay_in_mb", ShapeType::String),
            MemberSchema::optional("wal_receive_replay_delay_in_ms", ShapeType::String),
        ],
    }

    /// Lists download links of the SSL certificate.
    LIST_SSL_CERT_DOWNLOAD_LINK = ListSslCertDownloadLink(GET "/v3/{project_id}/instances/{instance_id}/ssl-cert/download-link") {
        input: [LANGUAGE, INSTANCE_ID],
        output: [
            MemberSchema::optional(
                "cert_info_list",
                ShapeType::List(&ShapeType::Structure(&SSL_CERT_LINK)),
            ),
        ],
    }

    /// Moves the standby node to another availability zone.
    MIGRATE_FOLLOWER = MigrateFollower(POST "/v3/{project_id}/instances/{instance_id}/migrateslave") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("nodeId", ShapeType::String),
            MemberSchema::required("azCode", ShapeType::String),
        ],
        output: [WORKFLOW_ID],
    }

    /// Converts a single instance to primary/standby.
    START_INSTANCE_SINGLE_TO_HA_ACTION = StartInstanceSingleToHaAction(POST "/v3/{project_id}/instances/{instance_id}/action") {
        input: [
            LANGUAGE,
            INSTANCE_ID,
            MemberSchema::required("single_to_ha", ShapeType::Structure(&SINGLE_TO_HA)),
        ],
        output: [JOB_ID, MemberSchema::optional("order_id", ShapeType::String)],
    }
}
