//! Lambda script templates for the console's Script Helper tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! "Generation" is a lookup into a fixed template table behind a simulated
//! backend delay. Unknown commands produce a placeholder script rather than
//! an error so the output pane always has something to show.

#[cfg(test)]
#[path = "scripts_test.rs"]
mod scripts_test;

use crate::net::latency::Latency;

/// Placeholder returned for commands with no template.
pub const SCRIPT_NOT_FOUND: &str = "# Script not found";

/// A one-click automation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptTemplate {
    pub command: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

pub const TEMPLATES: [ScriptTemplate; 3] = [
    ScriptTemplate {
        command: "remove S3 duplicates",
        description: "Clean up duplicate objects in S3 bucket",
        category: "Storage",
    },
    ScriptTemplate {
        command: "auto-tag EC2 with owner",
        description: "Automatically tag EC2 instances with owner information",
        category: "Compute",
    },
    ScriptTemplate {
        command: "cleanup CloudWatch logs",
        description: "Remove old CloudWatch log streams",
        category: "Monitoring",
    },
];

/// Template body for `command`, matched exactly.
#[must_use]
pub fn script_for(command: &str) -> &'static str {
    match command {
        "remove S3 duplicates" => S3_DUPLICATES_SCRIPT,
        "auto-tag EC2 with owner" => EC2_OWNER_TAG_SCRIPT,
        "cleanup CloudWatch logs" => CLOUDWATCH_CLEANUP_SCRIPT,
        _ => SCRIPT_NOT_FOUND,
    }
}

/// Wait out the simulated generation delay, then return the script.
pub async fn generate_script(latency: &dyn Latency, command: &str) -> &'static str {
    latency.settle().await;
    let script = script_for(command);
    if script == SCRIPT_NOT_FOUND {
        log::debug!("no script template for {command:?}");
    }
    script
}

/// Script Helper panel state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptHelperState {
    pub command: String,
    pub generating: bool,
    pub script: Option<String>,
}

impl ScriptHelperState {
    /// Whether the Generate button should accept a click.
    #[must_use]
    pub fn can_generate(&self) -> bool {
        !self.command.is_empty() && !self.generating
    }
}

const S3_DUPLICATES_SCRIPT: &str = r#"import boto3
import json

def lambda_handler(event, context):
    s3 = boto3.client('s3')
    bucket = event.get('bucket', 'your-bucket-name')
    prefix = event.get('prefix', '')
    
    try:
        # List all objects
        response = s3.list_objects_v2(Bucket=bucket, Prefix=prefix)
        
        if 'Contents' not in response:
            return {'statusCode': 200, 'body': 'No objects found'}
        
        # Group by size and last modified to find duplicates
        objects_by_key = {}
        duplicates_removed = 0
        
        for obj in response['Contents']:
            key = obj['Key']
            size = obj['Size']
            last_modified = obj['LastModified']
            
            identifier = f"{size}_{last_modified}"
            
            if identifier in objects_by_key:
                # This is a duplicate, delete it
                s3.delete_object(Bucket=bucket, Key=key)
                duplicates_removed += 1
                print(f"Deleted duplicate: {key}")
            else:
                objects_by_key[identifier] = key
        
        return {
            'statusCode': 200,
            'body': json.dumps({
                'message': f'Successfully removed {duplicates_removed} duplicates',
                'bucket': bucket,
                'duplicates_removed': duplicates_removed
            })
        }
        
    except Exception as e:
        print(f"Error: {str(e)}")
        return {
            'statusCode': 500,
            'body': json.dumps({'error': str(e)})
        }"#;

const EC2_OWNER_TAG_SCRIPT: &str = r#"import boto3
import json

def lambda_handler(event, context):
    ec2 = boto3.client('ec2')
    
    try:
        # Get instance information
        instance_id = event.get('instance_id')
        owner_tag = event.get('owner', 'unknown')
        
        if not instance_id:
            return {'statusCode': 400, 'body': 'Instance ID required'}
        
        # Get instance details
        response = ec2.describe_instances(InstanceIds=[instance_id])
        
        if not response['Reservations']:
            return {'statusCode': 404, 'body': 'Instance not found'}
        
        # Add owner tag
        ec2.create_tags(
            Resources=[instance_id],
            Tags=[
                {'Key': 'Owner', 'Value': owner_tag},
                {'Key': 'AutoTagged', 'Value': 'true'},
                {'Key': 'TaggedBy', 'Value': 'CloudGuardian'},
                {'Key': 'TaggedDate', 'Value': str(datetime.now().isoformat())}
            ]
        )
        
        return {
            'statusCode': 200,
            'body': json.dumps({
                'message': f'Successfully tagged instance {instance_id}',
                'instance_id': instance_id,
                'owner': owner_tag
            })
        }
        
    except Exception as e:
        print(f"Error: {str(e)}")
        return {
            'statusCode': 500,
            'body': json.dumps({'error': str(e)})
        }"#;

const CLOUDWATCH_CLEANUP_SCRIPT: &str = r#"import boto3
import json
from datetime import datetime, timedelta

def lambda_handler(event, context):
    logs_client = boto3.client('logs')
    
    try:
        log_group_name = event.get('log_group', '/aws/lambda/my-function')
        retention_days = event.get('retention_days', 30)
        
        # Calculate cutoff date
        cutoff_date = datetime.now() - timedelta(days=retention_days)
        cutoff_timestamp = int(cutoff_date.timestamp() * 1000)
        
        # Get log streams
        paginator = logs_client.get_paginator('describe_log_streams')
        deleted_streams = 0
        
        for page in paginator.paginate(logGroupName=log_group_name):
            for stream in page['logStreams']:
                if stream.get('lastEventTime', 0) < cutoff_timestamp:
                    try:
                        logs_client.delete_log_stream(
                            logGroupName=log_group_name,
                            logStreamName=stream['logStreamName']
                        )
                        deleted_streams += 1
                        print(f"Deleted stream: {stream['logStreamName']}")
                    except Exception as e:
                        print(f"Failed to delete {stream['logStreamName']}: {e}")
        
        return {
            'statusCode': 200,
            'body': json.dumps({
                'message': f'Cleanup completed for {log_group_name}',
                'deleted_streams': deleted_streams,
                'retention_days': retention_days
            })
        }
        
    except Exception as e:
        print(f"Error: {str(e)}")
        return {
            'statusCode': 500,
            'body': json.dumps({'error': str(e)})
        }"#;
